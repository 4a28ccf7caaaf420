//! Tests for the cache manager use case

use std::sync::Arc;
use std::time::Duration;

use memstash_application::CacheManager;
use memstash_domain::value_objects::{CacheConfig, CacheSection, Lookup, ProviderSettings};
use memstash_domain::{CacheExt, Error};
use memstash_providers::cache::{InMemoryClient, MemcacheCacheProvider, MemcacheProvider};

fn section() -> CacheSection {
    CacheSection::new().with(
        "memcache1",
        ProviderSettings::for_provider("memcache").with_addresses(["localhost:11211"]),
    )
}

async fn manager() -> (Arc<InMemoryClient>, CacheManager) {
    let client = Arc::new(InMemoryClient::new());
    let mut manager = CacheManager::new();
    manager
        .add_provider(
            "memcache1",
            Box::new(MemcacheCacheProvider::with_client(Arc::clone(&client))),
        )
        .unwrap();
    manager.init_providers(&section()).await.unwrap();
    (client, manager)
}

#[tokio::test]
async fn test_create_and_use_cache() {
    let (_, mut manager) = manager().await;
    manager
        .create_cache(CacheConfig::new("cache1", "memcache1"))
        .unwrap();

    let cache = manager.cache("cache1").unwrap();
    cache
        .put_as("key1", 342_348_347_i64, Duration::from_secs(3))
        .await
        .unwrap();
    assert_eq!(cache.get_as::<i64>("key1").await, Lookup::Hit(342_348_347));
}

#[tokio::test]
async fn test_multiple_caches() {
    let (_, mut manager) = manager().await;

    for name in ["testcache1", "testcache2", "testcache3"] {
        manager
            .create_cache(CacheConfig::new(name, "memcache1"))
            .unwrap();
        let cache = manager.cache(name).unwrap();
        assert_eq!(cache.name(), name);
    }

    assert_eq!(
        manager.cache_names(),
        vec!["testcache1", "testcache2", "testcache3"]
    );
}

#[tokio::test]
async fn test_provider_downcast_exposes_client() {
    let (client, manager) = manager().await;

    let provider = manager
        .provider("memcache1")
        .and_then(|p| p.downcast_ref::<MemcacheCacheProvider<InMemoryClient>>())
        .unwrap();
    assert!(Arc::ptr_eq(&provider.client().unwrap(), &client));
}

#[tokio::test]
async fn test_duplicate_cache_is_rejected() {
    let (_, mut manager) = manager().await;
    manager
        .create_cache(CacheConfig::new("cache1", "memcache1"))
        .unwrap();

    let err = manager
        .create_cache(CacheConfig::new("cache1", "memcache1"))
        .unwrap_err();
    assert!(matches!(err, Error::CacheExists { name } if name == "cache1"));
}

#[tokio::test]
async fn test_unknown_provider_is_rejected() {
    let (_, mut manager) = manager().await;
    let err = manager
        .create_cache(CacheConfig::new("cache1", "memcache9"))
        .unwrap_err();
    assert!(matches!(err, Error::ProviderNotFound { name } if name == "memcache9"));
    assert!(manager.cache("cache1").is_none());
}

#[tokio::test]
async fn test_duplicate_provider_is_rejected() {
    let mut manager = CacheManager::new();
    manager
        .add_provider("memcache1", Box::new(MemcacheProvider::new()))
        .unwrap();
    let err = manager
        .add_provider("memcache1", Box::new(MemcacheProvider::new()))
        .unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_init_fails_on_wrong_provider_kind() {
    let mut manager = CacheManager::new();
    manager
        .add_provider(
            "memcache1",
            Box::new(MemcacheCacheProvider::with_client(Arc::new(
                InMemoryClient::new(),
            ))),
        )
        .unwrap();

    let section = CacheSection::new().with(
        "memcache1",
        ProviderSettings::for_provider("mymemcache").with_addresses(["localhost:11211"]),
    );
    let err = manager.init_providers(&section).await.unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("expected 'memcache'"));
}

#[tokio::test]
async fn test_register_configured_providers_uses_registry() {
    let mut manager = CacheManager::new();
    let section = section().with("memcache2", ProviderSettings::for_provider("memcache"));

    manager.register_configured_providers(&section).unwrap();

    assert_eq!(manager.provider_names(), vec!["memcache1", "memcache2"]);
    assert_eq!(manager.provider("memcache2").map(|p| p.kind()), Some("memcache"));
}

#[tokio::test]
async fn test_register_configured_providers_rejects_unknown_kind() {
    let mut manager = CacheManager::new();
    let section = CacheSection::new().with("redis1", ProviderSettings::for_provider("redis"));

    let err = manager.register_configured_providers(&section).unwrap_err();
    assert!(matches!(err, Error::ProviderNotFound { .. }));
}
