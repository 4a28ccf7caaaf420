//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

mod blocking;
mod buffer_pool;
mod duration;

pub use blocking::run_blocking;
pub use buffer_pool::{BufferPool, PooledBuffer};
pub use duration::parse_duration_or;
