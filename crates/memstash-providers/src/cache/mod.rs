//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`MemcacheProvider`] | Distributed | Memcache-backed, shared by every process on the servers |
//!
//! Tests and single-process tools can run the same provider over an
//! [`InMemoryClient`] through [`MemcacheCacheProvider::with_client`].

pub mod memcache;

// Re-export for convenience
pub use memcache::{
    ClientSettings, InMemoryClient, MemcacheCache, MemcacheCacheProvider, MemcacheProvider,
    ProtocolClient,
};
