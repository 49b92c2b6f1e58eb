// ABOUTME: Body-mass-index computation from validated height and weight
// ABOUTME: Converts centimeters to meters and rounds half away from zero to one decimal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::CM_PER_METER;

pub use crate::models::bmi::round_to_precision;

/// Compute BMI from height in centimeters and weight in kilograms.
///
/// Formula: `BMI = weight_kg / (height_cm / 100)^2`, rounded to one decimal
/// place with round-half-away-from-zero.
///
/// Inputs must already be validated as strictly positive. The function is
/// pure and total over that domain.
///
/// # Reference
/// Keys, A., et al. (1972). Indices of relative weight and obesity.
/// *Journal of Chronic Diseases*, 25(6), 329-343.
#[must_use]
pub fn compute(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    round_to_precision(weight_kg / (height_m * height_m))
}
