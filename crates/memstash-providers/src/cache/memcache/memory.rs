//! Process-local memcache stand-in
//!
//! [`InMemoryClient`] keeps items in a map and follows memcache expiration
//! rules against a clock that only moves when [`InMemoryClient::advance`] is
//! called. It lets caches run without a server and makes expiration and
//! sliding eviction observable in tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use memstash_domain::error::{Error, Result};

use super::{ClientSettings, ProtocolClient};
use crate::constants::MEMCACHE_MAX_KEY_LENGTH;

#[derive(Debug)]
struct StoredItem {
    value: Vec<u8>,
    expires_at: Option<Duration>,
}

#[derive(Debug, Default)]
struct MemoryState {
    now: Duration,
    items: HashMap<String, StoredItem>,
}

impl MemoryState {
    fn expires_at(&self, expiration: u32) -> Option<Duration> {
        (expiration > 0).then(|| self.now + Duration::from_secs(u64::from(expiration)))
    }

    /// Live item under `key`, dropping it first if it has expired
    fn live(&mut self, key: &str) -> Option<&mut StoredItem> {
        let now = self.now;
        let expired = self
            .items
            .get(key)
            .and_then(|item| item.expires_at)
            .is_some_and(|at| at <= now);
        if expired {
            self.items.remove(key);
        }
        self.items.get_mut(key)
    }
}

/// In-process client with a manually advanced clock
///
/// Expirations are always relative seconds; the memcache convention of
/// reading values above thirty days as unix timestamps is not applied.
#[derive(Debug, Default)]
pub struct InMemoryClient {
    state: Mutex<MemoryState>,
    unavailable: AtomicBool,
    operations: AtomicUsize,
}

impl InMemoryClient {
    /// Create an empty client
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.lock().now += by;
    }

    /// Time left before `key` expires; `None` for absent or non-expiring items
    pub fn remaining_ttl(&self, key: &str) -> Option<Duration> {
        let mut state = self.lock();
        let now = state.now;
        state
            .live(key)
            .and_then(|item| item.expires_at)
            .map(|at| at.saturating_sub(now))
    }

    /// Whether a live item is stored under the full key
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().live(key).is_some()
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        let mut state = self.lock();
        let now = state.now;
        state
            .items
            .retain(|_, item| item.expires_at.is_none_or(|at| at > now));
        state.items.len()
    }

    /// Whether no live item is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every subsequent call fail with a connection error
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of protocol calls issued so far
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, key: Option<&str>) -> Result<()> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::connection("no servers configured or available"));
        }
        if let Some(key) = key {
            check_key(key)?;
        }
        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.len() > MEMCACHE_MAX_KEY_LENGTH {
        return Err(Error::protocol("key is too long"));
    }
    if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::protocol("key contains invalid characters"));
    }
    Ok(())
}

impl ProtocolClient for InMemoryClient {
    fn connect(_settings: &ClientSettings) -> Result<Self> {
        Ok(Self::new())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.begin(Some(key))?;
        Ok(self.lock().live(key).map(|item| item.value.clone()))
    }

    fn set(&self, key: &str, value: &[u8], expiration: u32) -> Result<()> {
        self.begin(Some(key))?;
        let mut state = self.lock();
        let expires_at = state.expires_at(expiration);
        state.items.insert(
            key.to_string(),
            StoredItem {
                value: value.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        self.begin(Some(key))?;
        let mut state = self.lock();
        if state.live(key).is_none() {
            return Ok(false);
        }
        Ok(state.items.remove(key).is_some())
    }

    fn touch(&self, key: &str, expiration: u32) -> Result<bool> {
        self.begin(Some(key))?;
        let mut state = self.lock();
        let expires_at = state.expires_at(expiration);
        Ok(state
            .live(key)
            .map(|item| item.expires_at = expires_at)
            .is_some())
    }

    fn flush(&self) -> Result<()> {
        self.begin(None)?;
        self.lock().items.clear();
        Ok(())
    }
}
