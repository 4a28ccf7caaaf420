//! Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`CacheManager`] | Host-side bookkeeping of providers and caches |

pub mod cache_manager;

pub use cache_manager::CacheManager;
