//! Tests for the cache provider registry
//!
//! Uses `extern crate memstash_providers` to force linkme registration of
//! the real providers.

// Force linkme registration of all providers from memstash-providers
extern crate memstash_providers;

use memstash_application::ports::registry::cache::*;
use memstash_domain::Error;

#[test]
fn test_list_providers_includes_memcache() {
    let providers = list_cache_providers();

    assert!(
        providers.iter().any(|(name, _)| *name == "memcache"),
        "Memcache provider should be registered. Available: {providers:?}"
    );
}

#[test]
fn test_resolve_memcache_provider() {
    let provider = resolve_cache_provider("memcache").unwrap();

    assert_eq!(provider.kind(), "memcache");
    assert_eq!(provider.name(), None);
}

#[test]
fn test_resolve_ignores_case() {
    assert!(resolve_cache_provider(" MEMCACHE ").is_ok());
}

#[test]
fn test_resolve_unknown_provider() {
    let err = resolve_cache_provider("mymemcache").unwrap_err();
    assert!(matches!(err, Error::ProviderNotFound { name } if name == "mymemcache"));
}
