// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, planner overrides, range checks, and logging filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::Path;

use dipper::config::{AppConfig, Environment};
use dipper::constants::env_keys;
use dipper::intelligence::{ConfigError, PlannerConfig};
use dipper::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_env() {
    for key in [
        env_keys::PUMP_CAPACITY,
        env_keys::GUIDE_CACHE_ENTRIES,
        env_keys::CATALOG_PATH,
        env_keys::ENVIRONMENT,
    ] {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
fn test_planner_defaults_and_validation() {
    let defaults = PlannerConfig::default();
    assert_eq!(defaults.pump_capacity, 8);
    assert_eq!(defaults.guide_cache_entries, 64);
    assert!(defaults.validate().is_ok());

    assert!(matches!(
        PlannerConfig::with_pump_capacity(0).validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    assert!(matches!(
        PlannerConfig::with_pump_capacity(65).validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    assert!(PlannerConfig::with_pump_capacity(64).validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_uses_defaults_when_unset() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.planner, PlannerConfig::default());
    assert!(config.catalog_path.is_none());
    assert!(config.summary().contains("(not set)"));
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var(env_keys::PUMP_CAPACITY, " 12 ");
    env::set_var(env_keys::GUIDE_CACHE_ENTRIES, "4");
    env::set_var(env_keys::CATALOG_PATH, "/srv/dipper/cocktails.yaml");
    env::set_var(env_keys::ENVIRONMENT, "production");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.planner.pump_capacity, 12);
    assert_eq!(config.planner.guide_cache_entries, 4);
    assert_eq!(
        config.catalog_path.as_deref(),
        Some(Path::new("/srv/dipper/cocktails.yaml"))
    );
    assert!(config.environment.is_production());
    assert!(config.summary().contains("Pumps: 12"));
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_capacity() {
    clear_env();
    env::set_var(env_keys::PUMP_CAPACITY, "eight");

    let result = PlannerConfig::from_env();
    let app_result = AppConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
    let error = app_result.unwrap_err();
    assert!(error.downcast_ref::<ConfigError>().is_some());
}

#[test]
#[serial]
fn test_from_env_rejects_zero_capacity() {
    clear_env();
    env::set_var(env_keys::PUMP_CAPACITY, "0");

    let result = PlannerConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_empty_catalog_path_is_ignored() {
    clear_env();
    env::set_var(env_keys::CATALOG_PATH, "");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert!(config.catalog_path.is_none());
}

#[test]
#[serial]
fn test_capacity_argument_replaces_malformed_env_value() {
    clear_env();
    env::set_var(env_keys::PUMP_CAPACITY, "eight");

    let config = AppConfig::from_env_with_capacity(Some(4));
    let planner = PlannerConfig::from_env_with_capacity(Some(4));
    clear_env();

    assert_eq!(config.unwrap().planner.pump_capacity, 4);
    assert_eq!(planner.unwrap().pump_capacity, 4);
}

#[test]
#[serial]
fn test_capacity_argument_is_still_range_checked() {
    clear_env();
    env::set_var(env_keys::PUMP_CAPACITY, "6");

    let too_large = AppConfig::from_env_with_capacity(Some(100));
    let zero = PlannerConfig::from_env_with_capacity(Some(0));
    let from_env = AppConfig::from_env_with_capacity(None);
    clear_env();

    let error = too_large.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ConfigError>(),
        Some(ConfigError::ValueOutOfRange(_))
    ));
    assert!(matches!(zero, Err(ConfigError::ValueOutOfRange(_))));
    assert_eq!(from_env.unwrap().planner.pump_capacity, 6);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
}

#[test]
fn test_logging_filter_scopes_our_crates() {
    let filter = LoggingConfig::default().with_level("debug").env_filter().unwrap();
    let rendered = filter.to_string().to_lowercase();

    assert!(rendered.contains("dipper_intelligence=debug"));
    assert!(rendered.contains("dipper_cli=debug"));

    assert!(LoggingConfig::default()
        .with_level("loud")
        .env_filter()
        .is_err());
}
