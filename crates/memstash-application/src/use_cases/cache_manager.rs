//! Cache manager use case
//!
//! The host-side owner of cache providers and the caches created from them.
//! Providers are added under the name of their `cache.<name>` configuration
//! block, initialized together, and then asked for caches by
//! [`CacheConfig::provider_name`].

use std::collections::BTreeMap;
use std::sync::Arc;

use memstash_domain::error::{Error, Result};
use memstash_domain::ports::{Cache, CacheProvider};
use memstash_domain::value_objects::{CacheConfig, CacheSection};
use tracing::{debug, info};

use crate::ports::registry::resolve_cache_provider;

/// Registry of named providers and the caches they created
///
/// # Example
///
/// ```ignore
/// let mut manager = CacheManager::new();
/// manager.add_provider_by_kind("memcache1", "memcache")?;
/// manager.init_providers(&config.cache).await?;
/// manager.create_cache(CacheConfig::new("sessions", "memcache1"))?;
///
/// let sessions = manager.cache("sessions").expect("created above");
/// ```
#[derive(Debug, Default)]
pub struct CacheManager {
    providers: BTreeMap<String, Box<dyn CacheProvider>>,
    caches: BTreeMap<String, Arc<dyn Cache>>,
}

impl CacheManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider under the name of its configuration block
    pub fn add_provider<S: Into<String>>(
        &mut self,
        name: S,
        provider: Box<dyn CacheProvider>,
    ) -> Result<()> {
        let name = name.into();
        if self.providers.contains_key(&name) {
            return Err(Error::configuration(format!(
                "cache provider '{name}' already added"
            )));
        }
        debug!(provider = %name, kind = provider.kind(), "cache provider added");
        self.providers.insert(name, provider);
        Ok(())
    }

    /// Add a registry-constructed provider of `kind` under `name`
    pub fn add_provider_by_kind<S: Into<String>>(&mut self, name: S, kind: &str) -> Result<()> {
        let provider = resolve_cache_provider(kind)?;
        self.add_provider(name, provider)
    }

    /// Add a registry provider for every block in `section` that names a
    /// provider kind and is not yet added
    pub fn register_configured_providers(&mut self, section: &CacheSection) -> Result<()> {
        for (name, settings) in section.iter() {
            if self.providers.contains_key(name) {
                continue;
            }
            if let Some(kind) = settings.provider.as_deref() {
                self.add_provider_by_kind(name, kind)?;
            }
        }
        Ok(())
    }

    /// Initialize every added provider in name order.
    ///
    /// Stops at the first provider that fails.
    pub async fn init_providers(&mut self, section: &CacheSection) -> Result<()> {
        for (name, provider) in &mut self.providers {
            provider.initialize(name, section).await?;
        }
        info!(
            count = self.providers.len(),
            "cache providers initialized"
        );
        Ok(())
    }

    /// Create a cache through the provider named in `config`
    pub fn create_cache(&mut self, config: CacheConfig) -> Result<()> {
        if self.caches.contains_key(&config.name) {
            return Err(Error::cache_exists(config.name));
        }
        let provider = self
            .providers
            .get(&config.provider_name)
            .ok_or_else(|| Error::provider_not_found(config.provider_name.clone()))?;

        let name = config.name.clone();
        let cache = provider.create_cache(config)?;
        debug!(cache = %name, "cache created");
        self.caches.insert(name, cache);
        Ok(())
    }

    /// Cache created under `name`
    pub fn cache(&self, name: &str) -> Option<Arc<dyn Cache>> {
        self.caches.get(name).cloned()
    }

    /// Provider added under `name`
    pub fn provider(&self, name: &str) -> Option<&dyn CacheProvider> {
        self.providers.get(name).map(|provider| &**provider)
    }

    /// Names of created caches, sorted
    pub fn cache_names(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    /// Names of added providers, sorted
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }
}
