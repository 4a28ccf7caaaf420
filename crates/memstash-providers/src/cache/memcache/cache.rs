//! Memcache-backed cache namespace

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use memstash_domain::error::Result;
use memstash_domain::ports::Cache;
use memstash_domain::value_objects::{CacheConfig, CacheValue, Lookup};
use tracing::{Span, debug, error, info_span};

use super::{Entry, ProtocolClient};
use crate::constants::CACHE_KEY_SEPARATOR;
use crate::utils::{BufferPool, run_blocking};

/// One cache namespace on a shared memcache connection set
///
/// Item keys are stored as `<cache name>-<key>`.
pub struct MemcacheCache<C> {
    config: CacheConfig,
    key_prefix: String,
    client: Arc<C>,
    buffers: Arc<BufferPool>,
    span: Span,
}

impl<C: ProtocolClient> MemcacheCache<C> {
    /// Bind a cache to a provider's client
    pub fn new(config: CacheConfig, client: Arc<C>, buffers: Arc<BufferPool>, parent: &Span) -> Self {
        let key_prefix = format!("{}{CACHE_KEY_SEPARATOR}", config.name);
        let span = info_span!(parent: parent, "cache", cache = %config.name);
        Self {
            config,
            key_prefix,
            client,
            buffers,
            span,
        }
    }

    /// Configuration this cache was created with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Key as stored on the server
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.key_prefix)
    }

    fn key_context(&self, key: &str) -> String {
        format!("cache/{}: key({key})", self.config.name)
    }

    async fn touch(&self, full_key: String, key: &str, expiration: u32) {
        let client = Arc::clone(&self.client);
        let touched = run_blocking(move || client.touch(&full_key, expiration)).await;
        if let Err(e) = touched {
            error!(parent: &self.span, key, error = %e, "touch failed");
        }
    }
}

#[async_trait]
impl<C: ProtocolClient> Cache for MemcacheCache<C> {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn get(&self, key: &str) -> Lookup<CacheValue> {
        let full_key = self.full_key(key);
        let client = Arc::clone(&self.client);
        let lookup_key = full_key.clone();
        let bytes = match run_blocking(move || client.get(&lookup_key)).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(parent: &self.span, key, "cache miss");
                return Lookup::Miss;
            }
            Err(e) => {
                error!(parent: &self.span, key, error = %e, "get failed");
                return Lookup::Miss;
            }
        };

        let entry = match Entry::decode(&bytes) {
            Ok(entry) => entry,
            Err(e) => {
                error!(parent: &self.span, key, error = %e, "stored item is not a valid entry");
                return Lookup::Corrupt;
            }
        };

        let expiration = entry.protocol_expiration();
        let value = match self.config.codec.decode(&entry.tag, entry.payload) {
            Ok(value) => value,
            Err(e) => {
                error!(parent: &self.span, key, tag = %entry.tag, error = %e, "stored value could not be decoded");
                return Lookup::Corrupt;
            }
        };

        if self.config.eviction_mode.is_sliding() {
            self.touch(full_key, key, expiration).await;
        }
        Lookup::Hit(value)
    }

    async fn put(&self, key: &str, value: CacheValue, ttl: Duration) -> Result<()> {
        let (tag, payload) = self.config.codec.encode(&value).inspect_err(|e| {
            debug!(parent: &self.span, key, error = %e, "value rejected by codec");
        })?;
        let entry = Entry::new(ttl, tag, payload);

        let mut buffer = self.buffers.acquire();
        entry
            .write_to(&mut buffer)
            .map_err(|e| e.with_prefix(&format!("cache/{}:", self.config.name)))?;

        let client = Arc::clone(&self.client);
        let full_key = self.full_key(key);
        let expiration = entry.protocol_expiration();
        run_blocking(move || client.set(&full_key, &buffer, expiration))
            .await
            .map_err(|e| e.with_prefix(&self.key_context(key)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let client = Arc::clone(&self.client);
        let full_key = self.full_key(key);
        run_blocking(move || client.delete(&full_key))
            .await
            .map(|_| ())
            .map_err(|e| e.with_prefix(&self.key_context(key)))
    }

    async fn flush(&self) -> Result<()> {
        let client = Arc::clone(&self.client);
        run_blocking(move || client.flush())
            .await
            .map_err(|e| e.with_prefix(&format!("cache/{}:", self.config.name)))
    }
}

impl<C> fmt::Debug for MemcacheCache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemcacheCache")
            .field("name", &self.config.name)
            .field("eviction_mode", &self.config.eviction_mode)
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}
