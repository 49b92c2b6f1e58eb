// ABOUTME: Configuration error types for environment-driven settings
// ABOUTME: Covers unusable values and environment variable access failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variable is set but its value cannot be used
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Environment variable access error (e.g. value is not valid unicode)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
}

impl ConfigError {
    /// Create an "invalid value" error
    #[must_use]
    pub fn invalid_value(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            reason: reason.into(),
        }
    }

    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::ConfigInvalid
    }
}
