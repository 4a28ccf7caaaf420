//! Unit tests for cache configuration value objects

use memstash_domain::value_objects::{
    CacheConfig, CacheSection, EvictionMode, ProviderSettings, ValueCodec,
};

#[test]
fn test_cache_config_defaults() {
    let config = CacheConfig::new("cache1", "memcache1");

    assert_eq!(config.name, "cache1");
    assert_eq!(config.provider_name, "memcache1");
    assert_eq!(config.eviction_mode, EvictionMode::Ttl);
    assert!(config.codec.is_registered::<i64>());
}

#[test]
fn test_cache_config_builders() {
    let config = CacheConfig::new("sessions", "memcache1")
        .with_eviction_mode(EvictionMode::Slide)
        .with_codec(ValueCodec::empty());

    assert!(config.eviction_mode.is_sliding());
    assert!(config.codec.tags().is_empty());
}

#[test]
fn test_eviction_mode_serde_names() {
    let mode: EvictionMode = serde_json::from_str(r#""slide""#).unwrap();
    assert_eq!(mode, EvictionMode::Slide);
    assert_eq!(serde_json::to_string(&EvictionMode::Ttl).unwrap(), r#""ttl""#);
}

#[test]
fn test_provider_settings_partial_block() {
    let settings: ProviderSettings =
        serde_json::from_str(r#"{"provider": "memcache", "timeout": "2s"}"#).unwrap();

    assert_eq!(settings.provider.as_deref(), Some("memcache"));
    assert!(settings.addresses.is_none());
    assert!(settings.max_idle_conns.is_none());
    assert_eq!(settings.timeout.as_deref(), Some("2s"));
}

#[test]
fn test_provider_settings_kind_check_ignores_case() {
    assert!(ProviderSettings::for_provider("MemCache").is_for("memcache"));
    assert!(!ProviderSettings::for_provider("mymemcache").is_for("memcache"));
    assert!(!ProviderSettings::default().is_for("memcache"));
}

#[test]
fn test_cache_section_is_ordered_by_name() {
    let section = CacheSection::new()
        .with("memcache2", ProviderSettings::for_provider("memcache"))
        .with(
            "memcache1",
            ProviderSettings::for_provider("memcache")
                .with_addresses(["localhost:11211"])
                .with_max_idle_conns(4),
        );

    assert_eq!(section.len(), 2);
    assert_eq!(section.names().collect::<Vec<_>>(), vec!["memcache1", "memcache2"]);
    assert_eq!(
        section.get("memcache1").and_then(|s| s.max_idle_conns),
        Some(4)
    );
}

#[test]
fn test_cache_section_deserializes_as_map() {
    let section: CacheSection = serde_json::from_str(
        r#"{"memcache1": {"provider": "memcache", "addresses": ["localhost:11211"]}}"#,
    )
    .unwrap();

    let block = section.get("memcache1").unwrap();
    assert_eq!(
        block.addresses.as_deref(),
        Some(&["localhost:11211".to_string()][..])
    );
}
