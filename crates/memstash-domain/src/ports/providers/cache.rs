//! Cache Provider Port
//!
//! A [`CacheProvider`] owns the client connection set of one configured
//! backend and hands out any number of named [`Cache`] namespaces that share
//! it. Providers are constructed by kind through the application registry,
//! initialized once from the `cache.<name>` configuration block and then
//! live for the rest of the process.
//!
//! ## Reads never fail
//!
//! [`Cache::get`] reports a [`Lookup`] instead of a `Result`: backend errors
//! are logged by the implementation and surface as an absent value, so a
//! flaky cache server degrades into cache misses.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::{Error, Result};
use crate::value_objects::{CacheConfig, CacheSection, CacheValue, Lookup};

/// One named cache namespace
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use memstash_domain::value_objects::CacheValue;
///
/// cache.put("user:1", CacheValue::new(42_i64), Duration::from_secs(30)).await?;
/// assert!(cache.exists("user:1").await);
///
/// let value = cache.get("user:1").await.into_option();
/// assert_eq!(value.and_then(|v| v.downcast_ref::<i64>().copied()), Some(42));
/// ```
#[async_trait]
pub trait Cache: Send + Sync + fmt::Debug {
    /// Namespace name this cache was created with
    fn name(&self) -> &str;

    /// Look up `key`.
    ///
    /// Backend errors are logged and reported as [`Lookup::Miss`]; items
    /// that cannot be decoded are reported as [`Lookup::Corrupt`].
    async fn get(&self, key: &str) -> Lookup<CacheValue>;

    /// Store `value` under `key` for `ttl`, replacing any previous item.
    ///
    /// Fails with [`Error::TypeNotRegistered`] when the value's type is not
    /// known to the cache's codec; nothing is written in that case.
    async fn put(&self, key: &str, value: CacheValue, ttl: Duration) -> Result<()>;

    /// Remove `key`. Removing a key that does not exist succeeds.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Remove every item on the backing connection set.
    ///
    /// The flush is not limited to this namespace.
    async fn flush(&self) -> Result<()>;

    /// Whether `key` currently holds a readable value
    async fn exists(&self, key: &str) -> bool {
        self.get(key).await.is_hit()
    }

    /// Return the stored value for `key`, storing `value` first when absent.
    ///
    /// The read and the write are separate backend calls; concurrent callers
    /// may both store, and the last write wins.
    async fn get_or_put(&self, key: &str, value: CacheValue, ttl: Duration) -> Result<CacheValue> {
        if let Lookup::Hit(existing) = self.get(key).await {
            return Ok(existing);
        }
        self.put(key, value.clone(), ttl).await?;
        Ok(value)
    }
}

/// Typed convenience methods over [`Cache`]
#[async_trait]
pub trait CacheExt: Cache {
    /// Look up `key` and downcast the hit to `T`.
    ///
    /// A hit holding another type is reported as [`Lookup::Corrupt`].
    async fn get_as<T>(&self, key: &str) -> Lookup<T>
    where
        T: Any + Clone + Send + Sync,
    {
        match self.get(key).await {
            Lookup::Hit(value) => value
                .downcast_ref::<T>()
                .cloned()
                .map_or(Lookup::Corrupt, Lookup::Hit),
            Lookup::Miss => Lookup::Miss,
            Lookup::Corrupt => Lookup::Corrupt,
        }
    }

    /// Store a concrete value
    async fn put_as<T>(&self, key: &str, value: T, ttl: Duration) -> Result<()>
    where
        T: Any + Send + Sync,
    {
        self.put(key, CacheValue::new(value), ttl).await
    }

    /// Typed [`Cache::get_or_put`]
    async fn get_or_put_as<T>(&self, key: &str, value: T, ttl: Duration) -> Result<T>
    where
        T: Any + Clone + Send + Sync,
    {
        let stored = self.get_or_put(key, CacheValue::new(value), ttl).await?;
        stored.downcast_ref::<T>().cloned().ok_or_else(|| {
            Error::serialization(format!(
                "cache/{}: key({key}) holds {} instead of {}",
                self.name(),
                stored.type_name(),
                std::any::type_name::<T>()
            ))
        })
    }
}

impl<C: Cache + ?Sized> CacheExt for C {}

/// Cache backend provider
///
/// Hosts keep providers as `Box<dyn CacheProvider>` and can recover the
/// concrete type through `downcast_ref` for backend specific features.
#[async_trait]
pub trait CacheProvider: DowncastSync + fmt::Debug {
    /// Backend kind this provider implements (e.g. `memcache`)
    fn kind(&self) -> &str;

    /// Configured name, set by a successful [`CacheProvider::initialize`]
    fn name(&self) -> Option<&str>;

    /// Resolve the `cache.<name>` block from `section`, connect and probe.
    async fn initialize(&mut self, name: &str, section: &CacheSection) -> Result<()>;

    /// Create a cache namespace bound to this provider's connection set
    fn create_cache(&self, config: CacheConfig) -> Result<Arc<dyn Cache>>;
}

impl_downcast!(sync CacheProvider);
