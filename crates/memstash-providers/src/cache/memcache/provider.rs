//! Memcache cache provider
//!
//! Owns the client connection set of one `cache.<name>` block. Caches created
//! by the provider share that connection set and prefix their keys with the
//! cache name.
//!
//! ## Example
//!
//! ```ignore
//! use memstash_providers::cache::MemcacheProvider;
//!
//! let mut provider = MemcacheProvider::new();
//! provider.initialize("memcache1", &config.cache).await?;
//! let sessions = provider.create_cache(CacheConfig::new("sessions", "memcache1"))?;
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use memstash_domain::error::{Error, Result};
use memstash_domain::ports::{Cache, CacheProvider};
use memstash_domain::value_objects::{CacheConfig, CacheSection};
use tracing::{Span, info, info_span};

use super::{ClientSettings, MemcacheCache, ProtocolClient};
use crate::constants::{MEMCACHE_PROVIDER_KIND, PROBE_KEY_SUFFIX};
use crate::utils::{BufferPool, run_blocking};

/// Memcache provider backed by the real memcache client
pub type MemcacheProvider = MemcacheCacheProvider<memcache::Client>;

/// Memcache cache provider, generic over the protocol client
pub struct MemcacheCacheProvider<C> {
    name: Option<String>,
    settings: Option<ClientSettings>,
    client: Option<Arc<C>>,
    buffers: Arc<BufferPool>,
    span: Span,
}

impl<C: ProtocolClient> MemcacheCacheProvider<C> {
    /// Create an uninitialized provider
    pub fn new() -> Self {
        Self {
            name: None,
            settings: None,
            client: None,
            buffers: BufferPool::new(),
            span: Span::none(),
        }
    }

    /// Create a provider that uses an already built client.
    ///
    /// `initialize` still checks the configuration block and probes the
    /// client, but does not connect.
    pub fn with_client(client: Arc<C>) -> Self {
        Self {
            client: Some(client),
            ..Self::new()
        }
    }

    /// The client connection set, once initialized or pre-installed
    pub fn client(&self) -> Option<Arc<C>> {
        self.client.clone()
    }

    /// Settings resolved by `initialize`
    pub fn settings(&self) -> Option<&ClientSettings> {
        self.settings.as_ref()
    }
}

impl<C: ProtocolClient> Default for MemcacheCacheProvider<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C: ProtocolClient> CacheProvider for MemcacheCacheProvider<C> {
    fn kind(&self) -> &str {
        MEMCACHE_PROVIDER_KIND
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    async fn initialize(&mut self, name: &str, section: &CacheSection) -> Result<()> {
        let block = section.get(name).cloned().unwrap_or_default();
        if !block.is_for(MEMCACHE_PROVIDER_KIND) {
            return Err(Error::configuration(format!(
                "cache/{name}: not a valid provider name, expected '{MEMCACHE_PROVIDER_KIND}'"
            )));
        }

        let span = info_span!("cache_provider", cache_provider = %name);
        let settings = ClientSettings::resolve(name, &block)?;

        let client = match &self.client {
            Some(client) => Arc::clone(client),
            None => {
                let connect_settings = settings.clone();
                let connected = run_blocking(move || C::connect(&connect_settings))
                    .await
                    .map_err(|e| e.with_prefix(&format!("cache/{name}:")))?;
                Arc::new(connected)
            }
        };

        let probe_client = Arc::clone(&client);
        let probe_key = format!("{name}{PROBE_KEY_SUFFIX}");
        run_blocking(move || probe_client.get(&probe_key).map(|_| ()))
            .await
            .map_err(|e| e.with_prefix(&format!("cache/{name}:")))?;

        info!(
            parent: &span,
            addresses = %settings.addresses.join(", "),
            "cache provider connected successfully"
        );

        self.name = Some(name.to_string());
        self.settings = Some(settings);
        self.client = Some(client);
        self.span = span;
        Ok(())
    }

    fn create_cache(&self, config: CacheConfig) -> Result<Arc<dyn Cache>> {
        let (Some(_), Some(client)) = (&self.name, &self.client) else {
            return Err(Error::not_initialized(MEMCACHE_PROVIDER_KIND));
        };
        Ok(Arc::new(MemcacheCache::new(
            config,
            Arc::clone(client),
            Arc::clone(&self.buffers),
            &self.span,
        )))
    }
}

impl<C> fmt::Debug for MemcacheCacheProvider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemcacheCacheProvider")
            .field("name", &self.name)
            .field("settings", &self.settings)
            .field("connected", &self.client.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use memstash_application::ports::registry::{CACHE_PROVIDERS, CacheProviderEntry};

use crate::constants::MEMCACHE_PROVIDER_DESCRIPTION;

/// Factory function for creating memcache provider instances.
fn memcache_provider_factory() -> Box<dyn CacheProvider> {
    Box::new(MemcacheProvider::new())
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MEMCACHE_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: MEMCACHE_PROVIDER_KIND,
    description: MEMCACHE_PROVIDER_DESCRIPTION,
    factory: memcache_provider_factory,
};
