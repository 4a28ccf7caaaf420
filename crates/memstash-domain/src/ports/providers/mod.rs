//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Backend that owns a client connection set and creates caches |
//! | Cache | One named cache namespace |

/// Cache provider port
pub mod cache;

pub use cache::{Cache, CacheExt, CacheProvider};
