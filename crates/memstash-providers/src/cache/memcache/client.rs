//! Memcache protocol client seam
//!
//! [`ProtocolClient`] is the narrow set of memcache calls the provider and
//! its caches issue. It is implemented for [`memcache::Client`] and for the
//! process-local [`InMemoryClient`](super::InMemoryClient).
//!
//! Calls are blocking; async callers run them through
//! [`run_blocking`](crate::utils::run_blocking).

use memcache::MemcacheError;
use memstash_domain::error::{Error, Result};

use super::ClientSettings;

/// Blocking memcache operations
pub trait ProtocolClient: Send + Sync + 'static {
    /// Build a client connection set from resolved settings
    fn connect(settings: &ClientSettings) -> Result<Self>
    where
        Self: Sized;

    /// Fetch raw item bytes, `None` on a miss
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store item bytes; `expiration` is in seconds, `0` never expires
    fn set(&self, key: &str, value: &[u8], expiration: u32) -> Result<()>;

    /// Remove an item; `false` when the key did not exist
    fn delete(&self, key: &str) -> Result<bool>;

    /// Reset an item's expiration; `false` when the key did not exist
    fn touch(&self, key: &str, expiration: u32) -> Result<bool>;

    /// Invalidate every item on every server
    fn flush(&self) -> Result<()>;
}

fn protocol_error(err: MemcacheError) -> Error {
    match err {
        MemcacheError::IOError(_) | MemcacheError::PoolError(_) => {
            Error::connection_with_source(err.to_string(), err)
        }
        other => Error::protocol_with_source(other.to_string(), other),
    }
}

impl ProtocolClient for memcache::Client {
    fn connect(settings: &ClientSettings) -> Result<Self> {
        let urls = settings.urls();
        let connected = match settings.pool_size {
            Some(size) => memcache::Client::with_pool_size(urls, size),
            None => memcache::Client::connect(urls),
        };
        connected.map_err(|e| Error::connection_with_source(e.to_string(), e))
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        memcache::Client::get::<Vec<u8>>(self, key).map_err(protocol_error)
    }

    fn set(&self, key: &str, value: &[u8], expiration: u32) -> Result<()> {
        memcache::Client::set(self, key, value, expiration).map_err(protocol_error)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        memcache::Client::delete(self, key).map_err(protocol_error)
    }

    fn touch(&self, key: &str, expiration: u32) -> Result<bool> {
        memcache::Client::touch(self, key, expiration).map_err(protocol_error)
    }

    fn flush(&self) -> Result<()> {
        memcache::Client::flush(self).map_err(protocol_error)
    }
}
