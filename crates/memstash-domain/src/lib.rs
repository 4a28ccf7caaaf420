//! # Domain Layer
//!
//! Core contracts and types of memstash. This crate has no knowledge of
//! memcache or any other backend; it defines:
//!
//! - [`ports`]: the [`Cache`](ports::Cache) and
//!   [`CacheProvider`](ports::CacheProvider) traits backends implement
//! - [`value_objects`]: cache configuration, opaque values, read outcomes
//!   and the explicit value codec
//! - [`error`]: the shared error type

/// Domain layer constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces implemented by outer layers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Cache, CacheExt, CacheProvider};
pub use value_objects::{
    CacheConfig, CacheSection, CacheValue, EvictionMode, Lookup, ProviderSettings, ValueCodec,
};
