// ABOUTME: Environment-based configuration loading for presentation and logging
// ABOUTME: Reads IRON_BEAST_* variables with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::DEFAULT_FACILITY_NAME;
use crate::errors::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use tracing::info;

/// Environment variable naming the facility in guidance messages
pub const FACILITY_NAME_ENV: &str = "IRON_BEAST_FACILITY_NAME";

/// Wording used when presenting results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Facility named in the call-to-action guidance
    pub facility_name: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            facility_name: DEFAULT_FACILITY_NAME.to_owned(),
        }
    }
}

impl PresentationConfig {
    /// Load presentation settings from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the facility name is set but blank,
    /// or `ConfigError::EnvVar` if it is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let facility_name = match env::var(FACILITY_NAME_ENV) {
            Ok(value) => parse_facility_name(&value)?,
            Err(VarError::NotPresent) => DEFAULT_FACILITY_NAME.to_owned(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { facility_name })
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Result wording
    pub presentation: PresentationConfig,
    /// Tracing subscriber settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load every configuration section from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any section rejects its environment values
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            presentation: PresentationConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        info!(
            facility = %config.presentation.facility_name,
            log.level = %config.logging.level,
            "Configuration loaded from environment"
        );
        Ok(config)
    }
}

fn parse_facility_name(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::invalid_value(
            FACILITY_NAME_ENV,
            "facility name must not be blank",
        ));
    }
    Ok(trimmed.to_owned())
}
