// ABOUTME: Data model for the BMI evaluation feature
// ABOUTME: Raw text inputs, validated measurements, and evaluation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// BMI categories and evaluation results
pub mod bmi;

pub use bmi::{BmiCategory, EvaluationResult};

use crate::constants::units::{HEIGHT_UNIT, WEIGHT_UNIT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two user-editable inputs of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Height in centimeters
    Height,
    /// Weight in kilograms
    Weight,
}

impl InputField {
    /// Lowercase field name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }

    /// Unit the field is entered in
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Height => HEIGHT_UNIT,
            Self::Weight => WEIGHT_UNIT,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Text exactly as typed into the height and weight fields.
///
/// No validity invariant holds here; anything may be stored until an
/// evaluation is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Height text, expected in centimeters
    pub height: String,
    /// Weight text, expected in kilograms
    pub weight: String,
}

impl RawInputs {
    /// Create raw inputs from any string-like values
    #[must_use]
    pub fn new(height: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            height: height.into(),
            weight: weight.into(),
        }
    }

    /// Text of the given field
    #[must_use]
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::Height => &self.height,
            InputField::Weight => &self.weight,
        }
    }
}

/// Measurements that passed validation: both finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}
