//! Cache Provider Registry
//!
//! Auto-registration system for cache providers.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by kind name.

use memstash_domain::error::{Error, Result};
use memstash_domain::ports::CacheProvider;

/// Registry entry for cache providers
///
/// Each cache provider implementation registers itself with this entry.
/// The factory builds an uninitialized provider; configuration is applied
/// later through [`CacheProvider::initialize`].
pub struct CacheProviderEntry {
    /// Unique provider kind (e.g., "memcache")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn() -> Box<dyn CacheProvider>,
}

/// Cache providers registered at link time
#[linkme::distributed_slice]
pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..];

/// Resolve cache provider by kind from registry
///
/// Kind matching ignores ASCII case, the same way configuration blocks
/// name their provider.
///
/// # Returns
/// * `Ok(Box<dyn CacheProvider>)` - Fresh, uninitialized provider instance
/// * `Err(Error::ProviderNotFound)` - No provider registered under `kind`
pub fn resolve_cache_provider(kind: &str) -> Result<Box<dyn CacheProvider>> {
    let kind = kind.trim();
    if let Some(entry) = CACHE_PROVIDERS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(kind))
    {
        return Ok((entry.factory)());
    }

    let available: Vec<&str> = CACHE_PROVIDERS.iter().map(|e| e.name).collect();
    tracing::debug!(kind, ?available, "unknown cache provider kind");
    Err(Error::provider_not_found(kind))
}

/// List all registered cache providers
///
/// Returns `(name, description)` tuples sorted by name.
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<(&'static str, &'static str)> = CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    providers.sort_unstable_by_key(|(name, _)| *name);
    providers
}
