// ABOUTME: Application constants for BMI thresholds, units, and user-facing messages
// ABOUTME: Named values that eliminate magic numbers from the evaluation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors
pub mod units;

/// Body-mass-index category boundaries
///
/// Intervals are half-open: each lower bound belongs to its own category.
///
/// References:
/// - World Health Organization. (2000). Obesity: preventing and managing the global epidemic.
///   WHO Technical Report Series 894.
pub mod bmi {
    /// Lower bound of the Normal band (values below are Underweight)
    pub const NORMAL_LOWER_BOUND: f64 = 18.5;

    /// Lower bound of the Overweight band (values below are Normal)
    pub const OVERWEIGHT_LOWER_BOUND: f64 = 25.0;

    /// Lower bound of the Obese band (values below are Overweight)
    pub const OBESE_LOWER_BOUND: f64 = 30.0;

    /// Decimal places kept on a computed BMI value
    pub const DECIMAL_PLACES: i32 = 1;
}

/// Messages requested from the feedback channel and shown with results
pub mod messages {
    /// Shown when a field is empty or not a number
    pub const MISSING_MEASUREMENTS: &str = "Please enter both height and weight";

    /// Shown when a field parses but is zero or negative
    pub const INVALID_MEASUREMENTS: &str = "Please enter valid values";

    /// Success toast after a completed evaluation
    pub const CALCULATION_SUCCESS: &str = "BMI calculated successfully!";

    /// Guidance shown for the Normal category
    pub const MAINTENANCE_GUIDANCE: &str = "Great job! Keep maintaining your healthy lifestyle.";

    /// Default facility name used in the call-to-action guidance
    pub const DEFAULT_FACILITY_NAME: &str = "Iron Beast Gym";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const IRON_BEAST_CLI: &str = "iron-beast-cli";
}
