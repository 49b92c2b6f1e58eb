// ABOUTME: Tests for environment-driven configuration loading
// ABOUTME: Runs serially because each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Environment configuration tests for `iron_beast`

use iron_beast::config::environment::FACILITY_NAME_ENV;
use iron_beast::config::{AppConfig, PresentationConfig};
use iron_beast::errors::{ConfigError, ErrorCode};
use iron_beast::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_env() {
    for key in [FACILITY_NAME_ENV, "LOG_FORMAT", "ENVIRONMENT", "SERVICE_NAME", "LOG_INCLUDE_LOCATION"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = PresentationConfig::from_env().unwrap();
    assert_eq!(config.facility_name, "Iron Beast Gym");
}

#[test]
#[serial]
fn test_facility_name_from_environment() {
    clear_env();
    env::set_var(FACILITY_NAME_ENV, "  Steel Den  ");
    let config = PresentationConfig::from_env().unwrap();
    assert_eq!(config.facility_name, "Steel Den");
    clear_env();
}

#[test]
#[serial]
fn test_blank_facility_name_is_rejected() {
    clear_env();
    env::set_var(FACILITY_NAME_ENV, "   ");
    let error = AppConfig::from_env().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidValue { key, .. } if key == FACILITY_NAME_ENV));
    assert_eq!(error.code(), ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "bmi-kiosk");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "bmi-kiosk");
    assert!(config.include_location);
    assert!(config.include_thread);
    clear_env();
}

#[test]
#[serial]
fn test_logging_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "iron-beast-cli");
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
}
