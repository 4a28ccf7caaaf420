//! Tests for memcache cache operations over the in-process client

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use memstash_domain::value_objects::{
    CacheConfig, CacheSection, CacheValue, EvictionMode, Lookup, ProviderSettings, ValueCodec,
};
use memstash_domain::{Cache, CacheExt, CacheProvider, Error};
use memstash_providers::cache::{InMemoryClient, MemcacheCacheProvider, ProtocolClient};
use serde::{Deserialize, Serialize};
use serde_json::json;

const TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    present: bool,
    value: String,
}

fn sample() -> Sample {
    Sample {
        name: "Jeeva".to_string(),
        present: true,
        value: "memcache provider".to_string(),
    }
}

async fn provider() -> (Arc<InMemoryClient>, MemcacheCacheProvider<InMemoryClient>) {
    let client = Arc::new(InMemoryClient::new());
    let mut provider = MemcacheCacheProvider::with_client(Arc::clone(&client));
    let section =
        CacheSection::new().with("memcache1", ProviderSettings::for_provider("memcache"));
    provider.initialize("memcache1", &section).await.unwrap();
    (client, provider)
}

async fn cache_with(config: CacheConfig) -> (Arc<InMemoryClient>, Arc<dyn Cache>) {
    let (client, provider) = provider().await;
    let cache = provider.create_cache(config).unwrap();
    (client, cache)
}

async fn cache(name: &str) -> (Arc<InMemoryClient>, Arc<dyn Cache>) {
    cache_with(CacheConfig::new(name, "memcache1")).await
}

#[tokio::test]
async fn test_builtin_values_roundtrip() {
    let (_, cache) = cache("cache1").await;

    cache.put_as("key1", 342_348_347_i64, TTL).await.unwrap();
    cache.put_as("key2", 0.783_463_74_f64, TTL).await.unwrap();
    cache
        .put_as("key3", "This is my cache string".to_string(), TTL)
        .await
        .unwrap();

    assert_eq!(cache.get_as::<i64>("key1").await, Lookup::Hit(342_348_347));
    assert_eq!(cache.get_as::<f64>("key2").await, Lookup::Hit(0.783_463_74));
    assert_eq!(
        cache.get_as::<String>("key3").await,
        Lookup::Hit("This is my cache string".to_string())
    );
}

#[tokio::test]
async fn test_registered_types_roundtrip() {
    let codec = ValueCodec::builder()
        .with_builtins()
        .register::<Sample>("sample")
        .register::<BTreeMap<String, serde_json::Value>>("map")
        .build();
    let (_, cache) = cache_with(CacheConfig::new("cache1", "memcache1").with_codec(codec)).await;

    let mut map = BTreeMap::new();
    map.insert("key1".to_string(), json!(343_434));
    map.insert("key2".to_string(), json!("kjdhdsjkdhjs"));
    map.insert("key3".to_string(), json!(87_235.346_5));

    for (key, value) in [
        ("key4", CacheValue::new(map.clone())),
        ("key5", CacheValue::new(sample())),
    ] {
        assert!(!cache.exists(key).await);
        assert!(cache.get(key).await.is_absent());

        cache.put(key, value.clone(), TTL).await.unwrap();
        assert!(cache.exists(key).await);

        cache.delete(key).await.unwrap();
        let stored = cache.get_or_put(key, value, TTL).await.unwrap();
        assert!(cache.exists(key).await);
        assert_eq!(stored.type_name(), cache.get(key).await.into_option().unwrap().type_name());
    }

    assert_eq!(cache.get_as::<Sample>("key5").await, Lookup::Hit(sample()));
    assert_eq!(
        cache
            .get_as::<BTreeMap<String, serde_json::Value>>("key4")
            .await,
        Lookup::Hit(map)
    );
}

#[tokio::test]
async fn test_unregistered_type_is_rejected_and_keeps_existing_value() {
    let (client, cache) = cache("cache1").await;
    cache.put_as("k1", 42_i64, TTL).await.unwrap();
    let calls = client.operation_count();

    let err = cache.put_as("k1", sample(), TTL).await.unwrap_err();

    assert!(matches!(err, Error::TypeNotRegistered { .. }));
    assert_eq!(client.operation_count(), calls);
    assert_eq!(cache.get_as::<i64>("k1").await, Lookup::Hit(42));
}

#[tokio::test]
async fn test_keys_are_prefixed_with_cache_name() {
    let (client, cache) = cache("addgetcache").await;
    cache.put_as("key_1", 1_i64, TTL).await.unwrap();

    assert!(client.contains_key("addgetcache-key_1"));
    assert!(!client.contains_key("key_1"));
    assert_eq!(cache.name(), "addgetcache");
}

#[tokio::test]
async fn test_add_and_get_many() {
    let (_, cache) = cache("addgetcache").await;

    for i in 0..20_i64 {
        cache.put_as(&format!("key_{i}"), i, TTL).await.unwrap();
    }
    for i in 5..10_i64 {
        assert_eq!(cache.get_as::<i64>(&format!("key_{i}")).await, Lookup::Hit(i));
    }
}

#[tokio::test]
async fn test_get_or_put_returns_existing_unchanged() {
    let (_, cache) = cache("cache1").await;

    let first = cache.get_or_put_as("key1", 10_i64, TTL).await.unwrap();
    let second = cache.get_or_put_as("key1", 20_i64, TTL).await.unwrap();

    assert_eq!(first, 10);
    assert_eq!(second, 10);
    assert_eq!(cache.get_as::<i64>("key1").await, Lookup::Hit(10));
}

#[tokio::test]
async fn test_delete_missing_key_succeeds() {
    let (_, cache) = cache("cache1").await;
    cache.delete("never-stored").await.unwrap();
}

#[tokio::test]
async fn test_items_expire_after_ttl() {
    let (client, cache) = cache("cache1").await;
    cache.put_as("key1", 1_i64, TTL).await.unwrap();

    client.advance(Duration::from_secs(2));
    assert!(cache.exists("key1").await);

    client.advance(Duration::from_secs(1));
    assert!(!cache.exists("key1").await);
}

#[tokio::test]
async fn test_sub_second_ttl_never_expires() {
    let (client, cache) = cache("cache1").await;
    cache
        .put_as("key1", 1_i64, Duration::from_millis(900))
        .await
        .unwrap();

    client.advance(Duration::from_secs(3600));
    assert!(cache.exists("key1").await);
    assert_eq!(client.remaining_ttl("cache1-key1"), None);
}

#[tokio::test]
async fn test_slide_mode_refreshes_ttl_on_read() {
    let config = CacheConfig::new("slidecache", "memcache1").with_eviction_mode(EvictionMode::Slide);
    let (client, cache) = cache_with(config).await;
    cache.put_as("key1", 1_i64, TTL).await.unwrap();

    client.advance(Duration::from_secs(2));
    assert_eq!(client.remaining_ttl("slidecache-key1"), Some(Duration::from_secs(1)));

    assert_eq!(cache.get_or_put_as("key1", 5_i64, TTL).await.unwrap(), 1);
    assert_eq!(client.remaining_ttl("slidecache-key1"), Some(TTL));

    client.advance(Duration::from_secs(2));
    assert!(cache.exists("key1").await);
    client.advance(Duration::from_secs(2));
    assert!(cache.exists("key1").await);
}

#[tokio::test]
async fn test_ttl_mode_does_not_touch() {
    let (client, cache) = cache("ttlcache").await;
    cache.put_as("key1", 1_i64, TTL).await.unwrap();

    client.advance(Duration::from_secs(2));
    assert!(cache.exists("key1").await);
    assert_eq!(client.remaining_ttl("ttlcache-key1"), Some(Duration::from_secs(1)));
}

#[tokio::test]
async fn test_flush_clears_every_namespace() {
    let (client, provider) = provider().await;
    let first = provider
        .create_cache(CacheConfig::new("testcache1", "memcache1"))
        .unwrap();
    let second = provider
        .create_cache(CacheConfig::new("testcache2", "memcache1"))
        .unwrap();

    first.put_as("key", 1_i64, TTL).await.unwrap();
    second.put_as("key", 2_i64, TTL).await.unwrap();
    assert_eq!(first.get_as::<i64>("key").await, Lookup::Hit(1));
    assert_eq!(second.get_as::<i64>("key").await, Lookup::Hit(2));

    first.flush().await.unwrap();

    assert!(!second.exists("key").await);
    assert!(client.is_empty());
}

#[tokio::test]
async fn test_undecodable_item_is_corrupt() {
    let (client, cache) = cache("cache1").await;
    client.set("cache1-garbage", b"\x00\x01", 0).unwrap();
    client
        .set("cache1-unknown", br#"{"d":3,"t":"sample","v":{}}"#, 0)
        .unwrap();

    assert!(cache.get("garbage").await.is_corrupt());
    assert!(cache.get("unknown").await.is_corrupt());
    assert!(!cache.exists("garbage").await);
}

#[tokio::test]
async fn test_server_errors_degrade_reads_and_surface_writes() {
    let (client, cache) = cache("cache1").await;
    cache.put_as("key1", 1_i64, TTL).await.unwrap();
    client.set_unavailable(true);

    assert!(matches!(cache.get("key1").await, Lookup::Miss));
    assert!(!cache.exists("key1").await);

    let err = cache.put_as("key1", 2_i64, TTL).await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("cache/cache1: key(key1)"));

    assert!(cache.delete("key1").await.unwrap_err().is_transport());

    let err = cache.flush().await.unwrap_err();
    assert!(err.to_string().contains("cache/cache1:"));

    client.set_unavailable(false);
    assert_eq!(cache.get_as::<i64>("key1").await, Lookup::Hit(1));
}

#[tokio::test]
async fn test_invalid_key_is_a_put_error() {
    let (_, cache) = cache("cache1").await;
    let err = cache.put_as("has space", 1_i64, TTL).await.unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[tokio::test]
async fn test_non_finite_float_is_rejected_and_keeps_existing_value() {
    let (client, cache) = cache("cache1").await;
    cache.put_as("k1", 1.5_f64, TTL).await.unwrap();

    for value in [f64::INFINITY, f64::NAN] {
        let err = cache.put_as("k1", value, TTL).await.unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }
    assert!(cache.put_as("k2", f64::NEG_INFINITY, TTL).await.is_err());

    assert_eq!(cache.get_as::<f64>("k1").await, Lookup::Hit(1.5));
    assert!(!client.contains_key("cache1-k2"));
}

#[tokio::test]
async fn test_delete_then_get_is_miss() {
    let (client, cache) = cache("cache1").await;
    cache.put_as("key1", sample().value, TTL).await.unwrap();
    assert!(cache.exists("key1").await);

    cache.delete("key1").await.unwrap();

    assert!(matches!(cache.get("key1").await, Lookup::Miss));
    assert!(!cache.exists("key1").await);
    assert!(!client.contains_key("cache1-key1"));
}
