//! Tests for `TNY__` environment overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p tny-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use std::env;
use tempfile::TempDir;
use tny_infrastructure::config::ConfigLoader;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn loader() -> (TempDir, ConfigLoader) {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(dir.path().join("absent.toml"));
    (dir, loader)
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    set_env("TNY__CACHE__PROVIDER", "null");
    set_env("TNY__TENANT_MANAGEMENT__MAX_NAME_LENGTH", "16");

    let (_dir, loader) = loader();
    let config = loader.load().expect("config loads");

    assert_eq!(config.cache.provider, "null");
    assert_eq!(config.tenant_management.max_name_length, 16);

    remove_env("TNY__CACHE__PROVIDER");
    remove_env("TNY__TENANT_MANAGEMENT__MAX_NAME_LENGTH");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("TNY_CACHE__PROVIDER", "null");

    let (_dir, loader) = loader();
    let config = loader.load().expect("config loads");

    assert_eq!(config.cache.provider, "moka");
    remove_env("TNY_CACHE__PROVIDER");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_invalid_env_value_fails_validation() {
    set_env("TNY__EVENT_BUS__CAPACITY", "0");

    let (_dir, loader) = loader();
    let result = loader.load();

    remove_env("TNY__EVENT_BUS__CAPACITY");
    assert!(result.is_err());
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_prefix() {
    set_env("ACME__LOGGING__LEVEL", "warn");

    let (_dir, loader) = loader();
    let config = loader.with_env_prefix("ACME").load().expect("config loads");

    assert_eq!(config.logging.level, "warn");
    remove_env("ACME__LOGGING__LEVEL");
}
