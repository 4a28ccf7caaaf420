//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CacheValue`] | Opaque application value held by a cache |
//! | [`Lookup`] | Hit, miss or corrupt outcome of a read |
//! | [`ValueCodec`] | Per-cache registry of storable value types |
//! | [`CacheConfig`] | Namespace, provider and eviction mode of a cache |
//! | [`ProviderSettings`] | One `cache.<name>` configuration block |

/// Cache and provider configuration value objects
pub mod config;
/// Explicit value type registry
pub mod codec;
/// Read outcome
pub mod lookup;
/// Opaque cached values
pub mod value;

pub use codec::{ValueCodec, ValueCodecBuilder};
pub use config::{CacheConfig, CacheSection, EvictionMode, ProviderSettings};
pub use lookup::Lookup;
pub use value::CacheValue;
