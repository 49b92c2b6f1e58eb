// ABOUTME: Body-mass-index categories and the immutable evaluation result
// ABOUTME: Categories are ordered bands with half-open WHO boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::bmi::{
    DECIMAL_PLACES, NORMAL_LOWER_BOUND, OBESE_LOWER_BOUND, OVERWEIGHT_LOWER_BOUND,
};
use crate::errors::EvaluationResultError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight-status band derived from a BMI value
///
/// Variants are declared in ascending BMI order so `Ord` follows the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Map a BMI value to its category.
    ///
    /// | Condition          | Category    |
    /// |--------------------|-------------|
    /// | bmi < 18.5         | Underweight |
    /// | 18.5 <= bmi < 25   | Normal      |
    /// | 25 <= bmi < 30     | Overweight  |
    /// | bmi >= 30          | Obese       |
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_LOWER_BOUND {
            Self::Underweight
        } else if bmi < OVERWEIGHT_LOWER_BOUND {
            Self::Normal
        } else if bmi < OBESE_LOWER_BOUND {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Every category in ascending order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Underweight, Self::Normal, Self::Overweight, Self::Obese]
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Uppercased label as shown on the result card
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Underweight => "UNDERWEIGHT",
            Self::Normal => "NORMAL",
            Self::Overweight => "OVERWEIGHT",
            Self::Obese => "OBESE",
        }
    }

    /// Whether this band needs only maintenance guidance
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Half-open interval `[lower, upper)` covered by this band.
    ///
    /// `None` marks an unbounded side.
    #[must_use]
    pub const fn range(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Underweight => (None, Some(NORMAL_LOWER_BOUND)),
            Self::Normal => (Some(NORMAL_LOWER_BOUND), Some(OVERWEIGHT_LOWER_BOUND)),
            Self::Overweight => (Some(OVERWEIGHT_LOWER_BOUND), Some(OBESE_LOWER_BOUND)),
            Self::Obese => (Some(OBESE_LOWER_BOUND), None),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Round to [`DECIMAL_PLACES`] using round-half-away-from-zero
#[must_use]
pub fn round_to_precision(value: f64) -> f64 {
    let factor = 10_f64.powi(DECIMAL_PLACES);
    (value * factor).round() / factor
}

/// Outcome of one successful evaluation.
///
/// The BMI is rounded, finite, and strictly positive, and the category is
/// always the one [`BmiCategory::from_bmi`] assigns to it. Deserialized
/// values are checked against the same rules.
///
/// Immutable once built; a later successful evaluation replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EvaluationRecord")]
pub struct EvaluationResult {
    bmi: f64,
    category: BmiCategory,
}

impl EvaluationResult {
    /// Build a result from a BMI value, rounding it and deriving its category.
    ///
    /// Returns `None` when the rounded value is not finite or not above zero.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Option<Self> {
        let bmi = round_to_precision(bmi);
        (bmi.is_finite() && bmi > 0.0).then(|| Self {
            bmi,
            category: BmiCategory::from_bmi(bmi),
        })
    }

    /// BMI rounded to one decimal place
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.bmi
    }

    /// Category derived from [`Self::bmi`]
    #[must_use]
    pub const fn category(&self) -> BmiCategory {
        self.category
    }
}

/// Wire shape of [`EvaluationResult`] before its invariants are checked
#[derive(Deserialize)]
struct EvaluationRecord {
    bmi: f64,
    category: BmiCategory,
}

impl TryFrom<EvaluationRecord> for EvaluationResult {
    type Error = EvaluationResultError;

    fn try_from(record: EvaluationRecord) -> Result<Self, Self::Error> {
        if round_to_precision(record.bmi).to_bits() != record.bmi.to_bits() {
            return Err(EvaluationResultError::NotRounded { bmi: record.bmi });
        }
        let result = Self::from_bmi(record.bmi)
            .ok_or(EvaluationResultError::OutOfRange { bmi: record.bmi })?;
        if result.category != record.category {
            return Err(EvaluationResultError::CategoryMismatch {
                bmi: record.bmi,
                category: record.category,
                expected: result.category,
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_ordered_by_bmi() {
        let all = BmiCategory::all();
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let all = BmiCategory::all();
        for pair in all.windows(2) {
            assert_eq!(pair[0].range().1, pair[1].range().0);
        }
        assert_eq!(BmiCategory::Underweight.range().0, None);
        assert_eq!(BmiCategory::Obese.range().1, None);
    }

    #[test]
    fn test_display_label_is_uppercased_label() {
        for category in BmiCategory::all() {
            assert_eq!(category.display_label(), category.label().to_uppercase());
        }
    }

    #[test]
    fn test_only_normal_is_healthy() {
        assert!(BmiCategory::Normal.is_healthy());
        assert!(!BmiCategory::Underweight.is_healthy());
        assert!(!BmiCategory::Overweight.is_healthy());
        assert!(!BmiCategory::Obese.is_healthy());
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&BmiCategory::Overweight).unwrap();
        assert_eq!(json, "\"overweight\"");
    }

    #[test]
    fn test_category_boundaries_belong_to_higher_band() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_result_derives_category_from_rounded_bmi() {
        let result = EvaluationResult::from_bmi(24.96).unwrap();
        assert!((result.bmi() - 25.0).abs() < f64::EPSILON);
        assert_eq!(result.category(), BmiCategory::Overweight);
    }

    #[test]
    fn test_result_rejects_non_positive_or_non_finite_bmi() {
        for bmi in [-3.0, 0.0, 0.04, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(EvaluationResult::from_bmi(bmi), None, "bmi {bmi}");
        }
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = EvaluationResult::from_bmi(22.9).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"bmi":22.9,"category":"normal"}"#);
        let decoded: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_category() {
        let json = r#"{"bmi":42.0,"category":"underweight"}"#;
        let error = serde_json::from_str::<EvaluationResult>(json).unwrap_err();
        assert!(error.to_string().contains("does not match"), "{error}");
    }

    #[test]
    fn test_deserialize_rejects_non_positive_bmi() {
        let json = r#"{"bmi":-3.0,"category":"obese"}"#;
        let error = serde_json::from_str::<EvaluationResult>(json).unwrap_err();
        assert!(error.to_string().contains("greater than zero"), "{error}");
    }

    #[test]
    fn test_deserialize_rejects_unrounded_bmi() {
        let json = r#"{"bmi":22.94,"category":"normal"}"#;
        let error = serde_json::from_str::<EvaluationResult>(json).unwrap_err();
        assert!(error.to_string().contains("one decimal place"), "{error}");
    }
}
