//! Application Ports
//!
//! ## Organization
//!
//! - **registry** - Auto-registration of cache provider kinds

pub mod registry;

pub use registry::*;
