//! Tests for error context helpers

use tny_infrastructure::error_ext::{ErrorContext, registry_error};

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ))
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Reading tenantry.toml").unwrap_err();

    assert_eq!(err.code(), "Tenantry:Configuration");
    assert!(err.to_string().contains("Reading tenantry.toml: denied"));
}

#[test]
fn test_with_context_is_lazy() {
    let mut called = false;
    let ok: std::result::Result<u8, std::io::Error> = Ok(1);

    let value = ok
        .with_context(|| {
            called = true;
            "never"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!called);
}

#[test]
fn test_registry_error() {
    let err = registry_error("cache", "Unknown cache provider 'x'");

    assert_eq!(err.code(), "Tenantry:Configuration");
    assert!(err.to_string().contains("Failed to resolve cache provider"));
}
