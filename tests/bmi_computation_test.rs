// ABOUTME: Integration tests for the BMI formula and its rounding rule
// ABOUTME: Pins round-half-away-from-zero on the first decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI computation tests for `iron_beast`

mod common;

use common::assert_bmi_eq;
use iron_beast::intelligence::bmi::compute;

#[test]
fn test_reference_values() {
    assert_bmi_eq(compute(175.0, 70.0), 22.9);
    assert_bmi_eq(compute(160.0, 45.0), 17.6);
    assert_bmi_eq(compute(170.0, 90.0), 31.1);
    assert_bmi_eq(compute(180.0, 81.0), 25.0);
}

#[test]
fn test_height_is_converted_from_centimeters() {
    // 100 cm is exactly one meter, so BMI equals weight
    assert_bmi_eq(compute(100.0, 50.0), 50.0);
    assert_bmi_eq(compute(200.0, 80.0), 20.0);
}

#[test]
fn test_exact_half_rounds_away_from_zero() {
    // 89 / 2.0^2 = 22.25 exactly; half-to-even would give 22.2
    assert_bmi_eq(compute(200.0, 89.0), 22.3);
    // 22.75 exactly
    assert_bmi_eq(compute(100.0, 22.75), 22.8);
}

#[test]
fn test_matches_formula_for_sampled_inputs() {
    for height in [120.0, 150.5, 163.0, 175.0, 188.2, 210.0] {
        for weight in [35.0, 52.4, 70.0, 95.5, 130.0, 180.0] {
            let height_m: f64 = height / 100.0;
            let expected = (weight / (height_m * height_m) * 10.0).round() / 10.0;
            assert_bmi_eq(compute(height, weight), expected);
        }
    }
}

#[test]
fn test_result_has_at_most_one_decimal() {
    for (height, weight) in [(175.0, 70.0), (163.3, 58.7), (191.0, 104.2)] {
        let bmi = compute(height, weight);
        let scaled = bmi * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "{bmi} has extra decimals");
    }
}

#[test]
fn test_is_pure() {
    assert_eq!(
        compute(181.0, 77.7).to_bits(),
        compute(181.0, 77.7).to_bits()
    );
}
