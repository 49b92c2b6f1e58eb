// ABOUTME: Result presentation turning an evaluation into a display payload
// ABOUTME: Formats the BMI, uppercases the label, and picks guidance and accent per category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PresentationConfig;
use crate::constants::messages::MAINTENANCE_GUIDANCE;
use crate::models::{BmiCategory, EvaluationResult};
use serde::{Deserialize, Serialize};

/// Color accent applied to the category label by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayAccent {
    /// No result shown yet
    Neutral,
    /// Underweight
    Blue,
    /// Normal
    Green,
    /// Overweight
    Yellow,
    /// Obese
    Red,
}

impl DisplayAccent {
    /// Accent for a category
    #[must_use]
    pub const fn for_category(category: BmiCategory) -> Self {
        match category {
            BmiCategory::Underweight => Self::Blue,
            BmiCategory::Normal => Self::Green,
            BmiCategory::Overweight => Self::Yellow,
            BmiCategory::Obese => Self::Red,
        }
    }

    /// Utility class used by the web front end
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Neutral => "text-white",
            Self::Blue => "text-blue-400",
            Self::Green => "text-green-400",
            Self::Yellow => "text-yellow-400",
            Self::Red => "text-red-400",
        }
    }

    /// SGR escape sequence for terminal rendering
    #[must_use]
    pub const fn ansi_code(&self) -> &'static str {
        match self {
            Self::Neutral => "\x1b[97m",
            Self::Blue => "\x1b[94m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Red => "\x1b[91m",
        }
    }
}

/// Everything the UI needs to render a result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPayload {
    /// BMI with exactly one decimal digit
    pub bmi: String,
    /// Category the value falls in
    pub category: BmiCategory,
    /// Uppercased category label
    pub category_label: String,
    /// Guidance sentence conditioned on the category
    pub guidance: String,
    /// Color accent for the label
    pub accent: DisplayAccent,
}

/// Builds display payloads using the facility-specific wording
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    config: PresentationConfig,
}

impl Presenter {
    /// Create a presenter from presentation settings
    #[must_use]
    pub const fn new(config: PresentationConfig) -> Self {
        Self { config }
    }

    /// Render an evaluation result
    #[must_use]
    pub fn present(&self, result: &EvaluationResult) -> DisplayPayload {
        let category = result.category();
        DisplayPayload {
            bmi: format_bmi(result.bmi()),
            category,
            category_label: category.display_label().to_owned(),
            guidance: self.guidance(category),
            accent: DisplayAccent::for_category(category),
        }
    }

    /// Maintenance message for Normal, call to action for every other band
    #[must_use]
    pub fn guidance(&self, category: BmiCategory) -> String {
        if category.is_healthy() {
            MAINTENANCE_GUIDANCE.to_owned()
        } else {
            format!(
                "Join {} to achieve your ideal body weight!",
                self.config.facility_name
            )
        }
    }
}

/// Render a result with the default facility wording
#[must_use]
pub fn present(result: &EvaluationResult) -> DisplayPayload {
    Presenter::default().present(result)
}

/// Format a BMI value with exactly one decimal digit
#[must_use]
pub fn format_bmi(bmi: f64) -> String {
    format!("{bmi:.1}")
}
