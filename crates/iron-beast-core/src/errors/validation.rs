// ABOUTME: Validation gate error kinds for height and weight inputs
// ABOUTME: Distinguishes missing, non-numeric, and non-positive values per field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use crate::constants::messages;
use crate::models::InputField;
use thiserror::Error;

/// Reasons a pair of raw measurements is rejected before computation.
///
/// `MissingField` and `NotANumber` share one user-facing message but stay
/// distinct variants so callers and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The field was empty or contained only whitespace
    #[error("{field} is required")]
    MissingField {
        /// Which input was empty
        field: InputField,
    },

    /// The field could not be parsed as a finite decimal number
    #[error("{field} must be a number, got '{value}'")]
    NotANumber {
        /// Which input failed to parse
        field: InputField,
        /// The trimmed text that was rejected
        value: String,
    },

    /// The field parsed but was zero or negative
    #[error("{field} must be greater than zero, got {value}")]
    NonPositiveValue {
        /// Which input was out of range
        field: InputField,
        /// The parsed value
        value: f64,
    },

    /// Both fields passed the gate but their ratio yields no usable BMI
    /// (rounds to zero or overflows)
    #[error("measurements produce an implausible BMI of {bmi}")]
    ImplausibleResult {
        /// The computed value that was rejected
        bmi: f64,
    },
}

impl ValidationError {
    /// Create a "missing field" error
    #[must_use]
    pub const fn missing_field(field: InputField) -> Self {
        Self::MissingField { field }
    }

    /// Create a "not a number" error
    #[must_use]
    pub fn not_a_number(field: InputField, value: impl Into<String>) -> Self {
        Self::NotANumber {
            field,
            value: value.into(),
        }
    }

    /// Create a "non-positive value" error
    #[must_use]
    pub const fn non_positive(field: InputField, value: f64) -> Self {
        Self::NonPositiveValue { field, value }
    }

    /// Create an "implausible result" error
    #[must_use]
    pub const fn implausible(bmi: f64) -> Self {
        Self::ImplausibleResult { bmi }
    }

    /// The input that failed validation, when a single field is to blame
    #[must_use]
    pub const fn field(&self) -> Option<InputField> {
        match self {
            Self::MissingField { field }
            | Self::NotANumber { field, .. }
            | Self::NonPositiveValue { field, .. } => Some(*field),
            Self::ImplausibleResult { .. } => None,
        }
    }

    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::MissingRequiredField,
            Self::NotANumber { .. } => ErrorCode::InvalidFormat,
            Self::NonPositiveValue { .. } | Self::ImplausibleResult { .. } => {
                ErrorCode::ValueOutOfRange
            }
        }
    }

    /// Short snake_case name of the failure kind, used as a log field
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::NotANumber { .. } => "not_a_number",
            Self::NonPositiveValue { .. } => "non_positive_value",
            Self::ImplausibleResult { .. } => "implausible_result",
        }
    }

    /// Message handed to the feedback channel
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField { .. } | Self::NotANumber { .. } => {
                messages::MISSING_MEASUREMENTS
            }
            Self::NonPositiveValue { .. } | Self::ImplausibleResult { .. } => {
                messages::INVALID_MEASUREMENTS
            }
        }
    }
}
