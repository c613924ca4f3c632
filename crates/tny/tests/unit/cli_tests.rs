//! Tests for the command line interface

use clap::Parser;
use std::io::Write;
use tny::cli::{Cli, Command, load_config, provider_lines, run_demo};
use tny::{AppConfig, init_app};

#[test]
fn test_parse_demo() {
    let cli = Cli::try_parse_from(["tny", "demo", "Acme", "Acme-Renamed"]).unwrap();

    assert_eq!(cli.config, None);
    assert_eq!(
        cli.command,
        Command::Demo {
            name: "Acme".to_string(),
            new_name: "Acme-Renamed".to_string(),
        }
    );
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["tny"]).is_err());
    assert!(Cli::try_parse_from(["tny", "demo", "Acme"]).is_err());
}

#[test]
fn test_load_config_from_flag() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[cache]\nprovider = \"null\"\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = Cli::try_parse_from(["tny", "--config", &path, "config"]).unwrap();
    let config = load_config(&cli).unwrap();

    assert_eq!(config.cache.provider, "null");
}

#[test]
fn test_provider_lines_list_registered_providers() {
    let lines = provider_lines();

    assert!(lines.iter().any(|l| l.starts_with("moka")));
    assert!(lines.iter().any(|l| l.starts_with("null")));
}

#[tokio::test]
async fn test_demo_reports_invalidated_key() {
    let context = init_app(AppConfig::default()).unwrap();

    let report = run_demo(&context, "Acme", "Acme-Renamed").await.unwrap();

    assert_eq!(report.old_key, "tenant-config:acme");
    assert!(report.cached_before_rename);
    assert!(!report.cached_after_rename);
    assert_eq!(
        report.new_configuration.as_ref().map(|c| c.name()),
        Some("Acme-Renamed")
    );
    assert!(report.to_string().contains("tenant-config:acme-renamed"));
}

#[tokio::test]
async fn test_demo_same_name_is_noop() {
    let context = init_app(AppConfig::default()).unwrap();

    let report = run_demo(&context, "Acme", "Acme").await.unwrap();

    assert!(report.cached_after_rename);
}
