//! Domain Port Interfaces
//!
//! Ports define the contracts that external layers implement:
//! - High-level modules (domain, application) define interfaces
//! - Low-level modules (providers) implement them

/// External service provider ports
pub mod providers;

pub use providers::{Cache, CacheExt, CacheProvider};
