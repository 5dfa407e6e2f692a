#![cfg(test)]

use std::fs;
use std::path::PathBuf;

use crate::cli::PackageArgs;
use crate::config::LiftConfig;
use crate::error::{CliError, ConfigError};

use lift_routes::HttpMethod;

#[test]
fn defaults_apply_without_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = LiftConfig::load(None, Some(dir.path())).unwrap();

    assert_eq!(config.service, "app");
    assert_eq!(config.pages_dir, PathBuf::from("build/pages"));
    assert_eq!(config.build_dir, "lift-build");
    assert_eq!(config.out_dir, PathBuf::from(".lift"));
    assert_eq!(config.default_methods, [HttpMethod::Get, HttpMethod::Head]);
    assert_eq!(config.cwd.as_deref(), Some(dir.path()));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lift.config.json"),
        r#"{
            "service": "nested-page-app",
            "pagesDir": "out/pages",
            "memorySize": 512
        }"#,
    )
    .unwrap();

    let config = LiftConfig::load(None, Some(dir.path())).unwrap();
    assert_eq!(config.service, "nested-page-app");
    assert_eq!(config.pages_dir, PathBuf::from("out/pages"));
    assert_eq!(config.memory_size, 512);
    // Untouched fields keep their defaults.
    assert_eq!(config.timeout, 6);
}

#[test]
fn cli_overrides_beat_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lift.config.json"),
        r#"{ "service": "from-file", "timeout": 10 }"#,
    )
    .unwrap();

    let mut config = LiftConfig::load(None, Some(dir.path())).unwrap();
    config.apply_overrides(&PackageArgs {
        service: Some("from-cli".to_string()),
        ..PackageArgs::default()
    });

    assert_eq!(config.service, "from-cli");
    assert_eq!(config.timeout, 10);
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let err = LiftConfig::load(Some(&dir.path().join("missing.json")), Some(dir.path()))
        .unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::NotFound(_))
    ));
}

#[test]
fn unknown_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("lift.config.json"),
        r#"{ "service": "app", "unknownKnob": true }"#,
    )
    .unwrap();

    let err = LiftConfig::load(None, Some(dir.path())).unwrap_err();
    assert!(matches!(err, CliError::Config(ConfigError::Load(_))));
}

#[test]
fn validation_rejects_out_of_range_values() {
    let mut config = LiftConfig::default();
    config.memory_size = 64;
    assert!(config.validate().is_err());

    let mut config = LiftConfig::default();
    config.timeout = 0;
    assert!(config.validate().is_err());

    let mut config = LiftConfig::default();
    config.service = "bad name".to_string();
    assert!(config.validate().is_err());

    let mut config = LiftConfig::default();
    config.build_dir = "/absolute".to_string();
    assert!(config.validate().is_err());

    assert!(LiftConfig::default().validate().is_ok());
}
