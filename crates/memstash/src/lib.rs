//! # memstash
//!
//! Memcache-backed cache provider with typed values and sliding eviction.
//!
//! This crate is the public entry point: it re-exports every layer and wires
//! configuration into an initialized [`CacheManager`](application::CacheManager).
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use memstash::infrastructure::ConfigLoader;
//! use memstash::{CacheConfig, CacheExt, EvictionMode};
//!
//! let config = ConfigLoader::new().load()?;
//! let mut manager = memstash::bootstrap(&config).await?;
//! manager.create_cache(
//!     CacheConfig::new("sessions", "memcache1").with_eviction_mode(EvictionMode::Slide),
//! )?;
//!
//! let sessions = manager.cache("sessions").expect("created above");
//! sessions.put_as("user:1", 42_i64, Duration::from_secs(30)).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports, value objects and the error type
//! - `application` - provider registry and cache manager
//! - `providers` - the memcache provider
//! - `infrastructure` - configuration loading and logging

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use memstash_domain::*;
}

/// Application layer - provider registry and cache manager
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use memstash_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use memstash_providers::*;
}

/// Infrastructure layer - configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use memstash_infrastructure::*;
}

/// Startup wiring
pub mod bootstrap;
/// Operator command line
pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use bootstrap::{bootstrap, bootstrap_with};
