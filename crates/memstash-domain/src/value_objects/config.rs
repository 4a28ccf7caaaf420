//! Cache configuration value objects
//!
//! [`CacheConfig`] is what a host hands to a provider when asking for a new
//! cache. [`ProviderSettings`] and [`CacheSection`] mirror the `cache.<name>`
//! blocks of the application configuration file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ValueCodec;

/// How item lifetimes behave after a read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionMode {
    /// Items expire a fixed duration after they were written
    #[default]
    Ttl,
    /// Every successful read pushes expiration back to the original duration
    Slide,
}

impl EvictionMode {
    /// Whether reads refresh the item lifetime
    pub fn is_sliding(self) -> bool {
        matches!(self, Self::Slide)
    }
}

/// Configuration for a single cache namespace
///
/// # Example
///
/// ```
/// use memstash_domain::value_objects::{CacheConfig, EvictionMode};
///
/// let config = CacheConfig::new("sessions", "default").with_eviction_mode(EvictionMode::Slide);
/// assert_eq!(config.name, "sessions");
/// assert!(config.eviction_mode.is_sliding());
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Cache namespace name, also used as key prefix
    pub name: String,
    /// Name of the configured provider that backs this cache
    pub provider_name: String,
    /// Eviction behavior
    pub eviction_mode: EvictionMode,
    /// Value types this cache can store
    pub codec: ValueCodec,
}

impl CacheConfig {
    /// Create a TTL cache config using the built-in value codec
    pub fn new<N: Into<String>, P: Into<String>>(name: N, provider_name: P) -> Self {
        Self {
            name: name.into(),
            provider_name: provider_name.into(),
            eviction_mode: EvictionMode::default(),
            codec: ValueCodec::default(),
        }
    }

    /// Set the eviction mode
    #[must_use]
    pub fn with_eviction_mode(mut self, mode: EvictionMode) -> Self {
        self.eviction_mode = mode;
        self
    }

    /// Replace the value codec
    #[must_use]
    pub fn with_codec(mut self, codec: ValueCodec) -> Self {
        self.codec = codec;
        self
    }
}

/// Settings of one `cache.<name>` configuration block
///
/// Every field is optional; providers apply their own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Provider kind this block is addressed to (e.g. `memcache`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Server addresses as `host:port`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    /// Upper bound of pooled connections per server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle_conns: Option<u32>,
    /// Read/write timeout as a duration string (`"5s"`, `"250ms"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

impl ProviderSettings {
    /// Settings addressed to the given provider kind
    pub fn for_provider<S: Into<String>>(kind: S) -> Self {
        Self {
            provider: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Set the server addresses
    #[must_use]
    pub fn with_addresses<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addresses = Some(addresses.into_iter().map(Into::into).collect());
        self
    }

    /// Set the pool size bound
    #[must_use]
    pub fn with_max_idle_conns(mut self, max: u32) -> Self {
        self.max_idle_conns = Some(max);
        self
    }

    /// Set the timeout string
    #[must_use]
    pub fn with_timeout<S: Into<String>>(mut self, timeout: S) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    /// Whether this block is addressed to `kind` (case-insensitive)
    pub fn is_for(&self, kind: &str) -> bool {
        self.provider
            .as_deref()
            .is_some_and(|provider| provider.trim().eq_ignore_ascii_case(kind))
    }
}

/// The `cache` section of the application configuration, keyed by block name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheSection(BTreeMap<String, ProviderSettings>);

impl CacheSection {
    /// Create an empty section
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings of the named block
    pub fn get(&self, name: &str) -> Option<&ProviderSettings> {
        self.0.get(name)
    }

    /// Add or replace a named block
    pub fn insert<S: Into<String>>(&mut self, name: S, settings: ProviderSettings) {
        self.0.insert(name.into(), settings);
    }

    /// Builder-style [`CacheSection::insert`]
    #[must_use]
    pub fn with<S: Into<String>>(mut self, name: S, settings: ProviderSettings) -> Self {
        self.insert(name, settings);
        self
    }

    /// Block names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate blocks in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderSettings)> {
        self.0.iter().map(|(name, settings)| (name.as_str(), settings))
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no block is configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ProviderSettings)> for CacheSection {
    fn from_iter<I: IntoIterator<Item = (String, ProviderSettings)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
