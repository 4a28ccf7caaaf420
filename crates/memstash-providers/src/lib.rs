//! # memstash - Provider Implementations
//!
//! This crate contains the cache provider implementations. Each provider
//! implements the `CacheProvider` port defined in `memstash-domain` and
//! registers itself in the `memstash-application` registry.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Memcache |
//!
//! ## Usage
//!
//! ```ignore
//! use memstash_providers::cache::MemcacheProvider;
//! ```

// Re-export memstash-domain types commonly used with providers
pub use memstash_domain::error::{Error, Result};
pub use memstash_domain::ports::{Cache, CacheProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;
