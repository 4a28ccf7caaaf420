//! Unit tests for domain error types

use std::error::Error as _;

use memstash_domain::Error;

#[test]
fn test_configuration_error() {
    let error = Error::configuration("not a valid provider name, expected 'memcache'");
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "not a valid provider name, expected 'memcache'");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert!(error.is_configuration());
    assert!(!error.is_transport());
}

#[test]
fn test_connection_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::connection_with_source("cache/sessions: connect failed", io);

    assert!(error.is_transport());
    assert_eq!(
        error.to_string(),
        "Connection error: cache/sessions: connect failed"
    );
    let source = error.source().expect("source preserved");
    assert_eq!(source.to_string(), "refused");
}

#[test]
fn test_protocol_error_is_transport() {
    let error = Error::protocol("cache/c1: key(k) server error");
    assert!(error.is_transport());
    assert!(error.to_string().contains("key(k)"));
}

#[test]
fn test_type_not_registered_error() {
    let error = Error::type_not_registered("app::Session");
    match error {
        Error::TypeNotRegistered { type_name } => assert_eq!(type_name, "app::Session"),
        _ => panic!("Expected TypeNotRegistered error"),
    }
}

#[test]
fn test_registry_errors_display() {
    assert_eq!(
        Error::provider_not_found("memcache9").to_string(),
        "Cache provider not found: memcache9"
    );
    assert_eq!(
        Error::cache_exists("sessions").to_string(),
        "Cache already exists: sessions"
    );
    assert_eq!(
        Error::not_initialized("memcache").to_string(),
        "Cache provider 'memcache' is not initialized"
    );
}

#[test]
fn test_internal_error() {
    let error = Error::internal("blocking task panicked");
    match error {
        Error::Internal { message } => assert_eq!(message, "blocking task panicked"),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_with_prefix_keeps_variant() {
    let error = Error::protocol("server error").with_prefix("cache/cache1: key(k1)");
    match error {
        Error::Protocol { message, .. } => assert_eq!(message, "cache/cache1: key(k1) server error"),
        _ => panic!("Expected Protocol error"),
    }
}

#[test]
fn test_with_prefix_ignores_structured_variants() {
    let error = Error::type_not_registered("i128").with_prefix("cache/cache1:");
    assert!(matches!(error, Error::TypeNotRegistered { type_name } if type_name == "i128"));
}
