// ABOUTME: Unit conversion constants for body measurements
// ABOUTME: Height is captured in centimeters and weight in kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per meter conversion factor
pub const CM_PER_METER: f64 = 100.0;

/// Unit label for height input
pub const HEIGHT_UNIT: &str = "cm";

/// Unit label for weight input
pub const WEIGHT_UNIT: &str = "kg";
