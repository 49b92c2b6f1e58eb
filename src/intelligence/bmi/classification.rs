// ABOUTME: Classification policy mapping a BMI value to its weight-status band
// ABOUTME: Half-open intervals where each boundary belongs to the higher band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::BmiCategory;

/// Map a BMI value to its category.
///
/// Boundaries are half-open and belong to the higher band; see
/// [`BmiCategory::from_bmi`] for the full table.
#[must_use]
pub fn classify(bmi: f64) -> BmiCategory {
    BmiCategory::from_bmi(bmi)
}
