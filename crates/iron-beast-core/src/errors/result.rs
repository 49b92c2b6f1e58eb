// ABOUTME: Errors raised when an evaluation result fails its consistency rules
// ABOUTME: Rejects stored or transmitted results whose BMI and category disagree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use crate::models::BmiCategory;
use thiserror::Error;

/// A result rejected while being rebuilt from outside the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationResultError {
    /// BMI carries more than one decimal place
    #[error("BMI must be rounded to one decimal place, got {bmi}")]
    NotRounded {
        /// Value as received
        bmi: f64,
    },

    /// BMI is not finite or not above zero
    #[error("BMI must be a finite value greater than zero, got {bmi}")]
    OutOfRange {
        /// Value as received
        bmi: f64,
    },

    /// Category is not the one the BMI falls into
    #[error("category {category} does not match BMI {bmi} (expected {expected})")]
    CategoryMismatch {
        /// Value as received
        bmi: f64,
        /// Category as received
        category: BmiCategory,
        /// Category the BMI actually falls into
        expected: BmiCategory,
    },
}

impl EvaluationResultError {
    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotRounded { .. } => ErrorCode::InvalidFormat,
            Self::OutOfRange { .. } | Self::CategoryMismatch { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}
