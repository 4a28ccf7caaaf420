//! Memcache cache provider
//!
//! | Item | Description |
//! |------|-------------|
//! | [`MemcacheCacheProvider`] | Provider owning one memcache connection set |
//! | [`MemcacheCache`] | Named cache namespace on that connection set |
//! | [`Entry`] | Envelope stored as every item value |
//! | [`ProtocolClient`] | Blocking memcache calls, real or in-process |
//! | [`InMemoryClient`] | Process-local client with a manual clock |

mod cache;
mod client;
mod entry;
mod memory;
mod provider;
mod settings;

pub use cache::MemcacheCache;
pub use client::ProtocolClient;
pub use entry::{Entry, expiration_secs};
pub use memory::InMemoryClient;
pub use provider::{MemcacheCacheProvider, MemcacheProvider};
pub use settings::ClientSettings;
