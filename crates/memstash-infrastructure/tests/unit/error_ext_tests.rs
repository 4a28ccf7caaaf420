//! Error context extension tests

use std::error::Error as _;
use std::io;

use memstash_domain::Error;
use memstash_infrastructure::error_ext::ErrorContext;

fn failing() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "missing file"))
}

#[test]
fn test_context_wraps_as_internal() {
    let err = failing().context("Failed to read").unwrap_err();

    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(err.to_string(), "Internal error: Failed to read: missing file");
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context evaluated on success") })
        .unwrap();
    assert_eq!(value, 7);

    let err = failing()
        .with_context(|| format!("Failed to read {}", "memstash.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read memstash.toml"));
}

#[test]
fn test_config_context_keeps_source() {
    let err = failing().config_context("Bad config").unwrap_err();

    assert!(err.is_configuration());
    assert!(err.source().is_some());
}

#[test]
fn test_connection_context_is_transport() {
    let err = failing().connection_context("Dial failed").unwrap_err();

    assert!(matches!(err, Error::Connection { .. }));
    assert!(err.is_transport());
}
