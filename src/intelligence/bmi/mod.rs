// ABOUTME: Body-mass-index evaluation pipeline: validate, compute, classify, present
// ABOUTME: Pure evaluate entry point plus a feedback-aware variant for UI hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # BMI Evaluation
//!
//! Every evaluation runs the full pipeline synchronously:
//!
//! 1. [`validation::validate`] rejects missing, malformed, or non-positive input
//! 2. [`computation::compute`] derives the BMI rounded to one decimal place
//! 3. [`classification::classify`] maps the rounded value to a category
//! 4. [`presentation::Presenter`] builds the payload the UI renders
//!
//! All fallibility sits at the validation gate; computation and
//! classification are total over validated input.

/// Stateful calculator owning raw inputs and the last result
pub mod calculator;
/// Category thresholds
pub mod classification;
/// BMI formula and rounding rule
pub mod computation;
/// Display payload, guidance, and accents
pub mod presentation;
/// Input validation gate
pub mod validation;

pub use calculator::{BmiCalculator, CalculatorPhase, SharedBmiCalculator};
pub use classification::classify;
pub use computation::compute;
pub use presentation::{present, DisplayAccent, DisplayPayload, Presenter};
pub use validation::validate;

use crate::constants::messages::CALCULATION_SUCCESS;
use crate::errors::ValidationError;
use crate::feedback::FeedbackChannel;
use crate::logging::AppLogger;
use crate::models::{EvaluationResult, RawInputs};

/// Run validation, computation, and classification on raw inputs.
///
/// Deterministic: identical inputs always yield an identical result.
///
/// # Errors
///
/// Returns the `ValidationError` raised by the validation gate, or
/// `ValidationError::ImplausibleResult` when valid inputs produce a BMI that
/// rounds to zero or is not finite.
pub fn evaluate(raw: &RawInputs) -> Result<EvaluationResult, ValidationError> {
    let measurements = validate(&raw.height, &raw.weight)?;
    let bmi = compute(measurements.height_cm, measurements.weight_kg);
    EvaluationResult::from_bmi(bmi).ok_or_else(|| ValidationError::implausible(bmi))
}

/// Evaluate and report the outcome through a feedback channel.
///
/// A failure requests an error notification with the user-facing message;
/// a success requests the success notification.
///
/// # Errors
///
/// Propagates the same errors as [`evaluate`].
pub fn evaluate_with_feedback(
    raw: &RawInputs,
    feedback: &dyn FeedbackChannel,
) -> Result<EvaluationResult, ValidationError> {
    match evaluate(raw) {
        Ok(result) => {
            AppLogger::log_bmi_evaluation(&result);
            feedback.notify_success(CALCULATION_SUCCESS);
            Ok(result)
        }
        Err(error) => {
            AppLogger::log_validation_failure(&error);
            feedback.notify_error(error.user_message());
            Err(error)
        }
    }
}

