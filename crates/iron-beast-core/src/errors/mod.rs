// ABOUTME: Unified error taxonomy with stable error codes for the BMI evaluator
// ABOUTME: Re-exports validation and configuration errors and maps them to ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! All failures in the evaluation pipeline are user-input errors raised at the
//! validation gate. They are recoverable and reported through the feedback
//! channel; none of them is a system fault. Configuration errors surface at
//! process start, and result errors guard results deserialized from storage
//! or the wire.

/// Configuration loading errors
pub mod config;

/// Consistency errors for results rebuilt outside the pipeline
pub mod result;

/// User-input validation errors
pub mod validation;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use config::ConfigError;
pub use result::EvaluationResultError;
pub use validation::ValidationError;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required input was empty or absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// An input could not be parsed as a decimal number
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// An input parsed but lies outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// A configuration value is present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "The configuration is invalid",
        }
    }

    /// Stable wire identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
