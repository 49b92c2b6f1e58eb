// ABOUTME: Integration tests for the BMI classification thresholds
// ABOUTME: Boundary values must land in the higher band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classification policy tests for `iron_beast`

use iron_beast::intelligence::bmi::classify;
use iron_beast::models::BmiCategory;

#[test]
fn test_boundaries_belong_to_higher_band() {
    assert_eq!(classify(18.5), BmiCategory::Normal);
    assert_eq!(classify(25.0), BmiCategory::Overweight);
    assert_eq!(classify(30.0), BmiCategory::Obese);
}

#[test]
fn test_values_just_below_boundaries() {
    assert_eq!(classify(18.499), BmiCategory::Underweight);
    assert_eq!(classify(18.4), BmiCategory::Underweight);
    assert_eq!(classify(24.999), BmiCategory::Normal);
    assert_eq!(classify(24.9), BmiCategory::Normal);
    assert_eq!(classify(29.999), BmiCategory::Overweight);
    assert_eq!(classify(29.9), BmiCategory::Overweight);
}

#[test]
fn test_band_interiors() {
    assert_eq!(classify(12.0), BmiCategory::Underweight);
    assert_eq!(classify(22.0), BmiCategory::Normal);
    assert_eq!(classify(27.5), BmiCategory::Overweight);
    assert_eq!(classify(45.0), BmiCategory::Obese);
}

#[test]
fn test_extremes() {
    assert_eq!(classify(0.1), BmiCategory::Underweight);
    assert_eq!(classify(f64::MAX), BmiCategory::Obese);
}

#[test]
fn test_classification_is_monotonic() {
    let mut previous = classify(0.0);
    let mut bmi = 0.0_f64;
    while bmi < 60.0 {
        let current = classify(bmi);
        assert!(current >= previous, "category dropped at {bmi}");
        previous = current;
        bmi += 0.1;
    }
}

#[test]
fn test_each_category_range_contains_its_own_values() {
    for category in BmiCategory::all() {
        let (lower, upper) = category.range();
        if let Some(lower) = lower {
            assert_eq!(classify(lower), category);
        }
        if let Some(upper) = upper {
            assert_ne!(classify(upper), category);
        }
    }
}
