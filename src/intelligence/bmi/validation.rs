// ABOUTME: Validation gate that turns raw height/weight text into measurements
// ABOUTME: Rejects empty, non-numeric, and non-positive inputs before computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use crate::models::{BodyMeasurements, InputField};

/// Validate raw height (cm) and weight (kg) text.
///
/// Checks run in three passes over both fields: presence, then parsing,
/// then positivity. Within a pass height is inspected before weight, so
/// the first failing field of the earliest failing pass is reported.
///
/// Height stays in centimeters; unit conversion belongs to the computation
/// step.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` if a field is empty or blank,
/// `ValidationError::NotANumber` if it is not a finite decimal number, and
/// `ValidationError::NonPositiveValue` if it is zero or negative.
pub fn validate(raw_height: &str, raw_weight: &str) -> Result<BodyMeasurements, ValidationError> {
    let height_text = require(InputField::Height, raw_height)?;
    let weight_text = require(InputField::Weight, raw_weight)?;

    let height_cm = parse_decimal(InputField::Height, height_text)?;
    let weight_kg = parse_decimal(InputField::Weight, weight_text)?;

    ensure_positive(InputField::Height, height_cm)?;
    ensure_positive(InputField::Weight, weight_kg)?;

    Ok(BodyMeasurements {
        height_cm,
        weight_kg,
    })
}

fn require(field: InputField, raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing_field(field));
    }
    Ok(trimmed)
}

fn parse_decimal(field: InputField, text: &str) -> Result<f64, ValidationError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        // "inf" and "NaN" parse successfully but are not measurements
        Ok(_) | Err(_) => Err(ValidationError::not_a_number(field, text)),
    }
}

fn ensure_positive(field: InputField, value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::non_positive(field, value));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims_whitespace() {
        assert_eq!(require(InputField::Height, "  175 ").unwrap(), "175");
        assert_eq!(
            require(InputField::Weight, " \t"),
            Err(ValidationError::missing_field(InputField::Weight))
        );
    }

    #[test]
    fn test_parse_decimal_rejects_non_finite() {
        assert!(parse_decimal(InputField::Height, "inf").is_err());
        assert!(parse_decimal(InputField::Height, "NaN").is_err());
        assert!(parse_decimal(InputField::Height, "-infinity").is_err());
    }

    #[test]
    fn test_parse_decimal_accepts_decimal_forms() {
        assert!((parse_decimal(InputField::Weight, "70.5").unwrap() - 70.5).abs() < f64::EPSILON);
        assert!((parse_decimal(InputField::Weight, ".5").unwrap() - 0.5).abs() < f64::EPSILON);
        assert!((parse_decimal(InputField::Weight, "+80").unwrap() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ensure_positive_rejects_negative_zero() {
        assert_eq!(
            ensure_positive(InputField::Weight, -0.0),
            Err(ValidationError::non_positive(InputField::Weight, -0.0))
        );
    }
}
