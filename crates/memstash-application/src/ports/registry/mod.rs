//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for cache providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(CACHE_...)]  │
//! │                        static ENTRY: CacheProviderEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static CACHE_PROVIDERS: [..] = [..]  │
//! │                              ↓                                  │
//! │  3. Resolver queries:  CACHE_PROVIDERS.iter()                   │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = memcache" → MemcacheProvider │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in memstash-providers)
//!
//! ```ignore
//! use memstash_application::ports::registry::{CacheProviderEntry, CACHE_PROVIDERS};
//!
//! #[linkme::distributed_slice(CACHE_PROVIDERS)]
//! static MEMCACHE_PROVIDER: CacheProviderEntry = CacheProviderEntry {
//!     name: "memcache",
//!     description: "Memcache server backed cache provider",
//!     factory: || Box::new(MemcacheCacheProvider::new()),
//! };
//! ```
//!
//! ### Resolving a Provider
//!
//! ```ignore
//! use memstash_application::ports::registry::resolve_cache_provider;
//!
//! let provider = resolve_cache_provider("memcache")?;
//! ```

pub mod cache;

pub use cache::{CACHE_PROVIDERS, CacheProviderEntry, list_cache_providers, resolve_cache_provider};
