// ABOUTME: Stateful BMI calculator modelling the Idle/Evaluating/result/error lifecycle
// ABOUTME: Failed attempts keep the previous result; a shared wrapper serializes evaluations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::evaluate_with_feedback;
use super::presentation::{DisplayPayload, Presenter};
use crate::errors::ValidationError;
use crate::feedback::FeedbackChannel;
use crate::models::{EvaluationResult, InputField, RawInputs};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Externally visible lifecycle phase of the calculator.
///
/// `Evaluating` only exists while [`BmiCalculator::calculate`] runs; callers
/// never observe it because evaluation is synchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorPhase {
    /// No evaluation attempted yet
    #[default]
    Idle,
    /// Pipeline running
    Evaluating,
    /// Last attempt succeeded
    ShowingResult,
    /// Last attempt failed; any earlier result is still held
    ShowingError,
}

/// Calculator state owned by one UI session
#[derive(Debug, Clone, Default)]
pub struct BmiCalculator {
    inputs: RawInputs,
    result: Option<EvaluationResult>,
    last_error: Option<ValidationError>,
    phase: CalculatorPhase,
    presenter: Presenter,
}

impl BmiCalculator {
    /// Create a calculator using the given presenter for display payloads
    #[must_use]
    pub fn new(presenter: Presenter) -> Self {
        Self {
            presenter,
            ..Self::default()
        }
    }

    /// Replace the height text; never triggers an evaluation
    pub fn set_height(&mut self, height: impl Into<String>) {
        self.inputs.height = height.into();
    }

    /// Replace the weight text; never triggers an evaluation
    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.inputs.weight = weight.into();
    }

    /// Replace one field by name
    pub fn set_field(&mut self, field: InputField, value: impl Into<String>) {
        match field {
            InputField::Height => self.set_height(value),
            InputField::Weight => self.set_weight(value),
        }
    }

    /// Replace both fields at once
    pub fn set_inputs(&mut self, inputs: RawInputs) {
        self.inputs = inputs;
    }

    /// Current raw inputs
    #[must_use]
    pub const fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    /// Most recent successful result, if any
    #[must_use]
    pub const fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    /// Error from the most recent attempt, cleared by the next success
    #[must_use]
    pub const fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> CalculatorPhase {
        self.phase
    }

    /// Display payload for the held result
    #[must_use]
    pub fn display(&self) -> Option<DisplayPayload> {
        self.result.as_ref().map(|result| self.presenter.present(result))
    }

    /// Run the full pipeline on the current inputs.
    ///
    /// On success the held result is replaced; on failure it is left
    /// untouched and only an error notification is requested.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` that stopped the pipeline.
    pub fn calculate(
        &mut self,
        feedback: &dyn FeedbackChannel,
    ) -> Result<EvaluationResult, ValidationError> {
        self.phase = CalculatorPhase::Evaluating;
        match evaluate_with_feedback(&self.inputs, feedback) {
            Ok(result) => {
                self.result = Some(result);
                self.last_error = None;
                self.phase = CalculatorPhase::ShowingResult;
                Ok(result)
            }
            Err(error) => {
                self.last_error = Some(error.clone());
                self.phase = CalculatorPhase::ShowingError;
                Err(error)
            }
        }
    }
}

/// Thread-safe handle where each evaluation publishes atomically.
///
/// The lock is held across validate, compute, classify, and publish, so
/// concurrent callers never observe a half-applied evaluation.
#[derive(Debug, Clone, Default)]
pub struct SharedBmiCalculator {
    inner: Arc<Mutex<BmiCalculator>>,
}

impl SharedBmiCalculator {
    /// Wrap an existing calculator
    #[must_use]
    pub fn new(calculator: BmiCalculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calculator)),
        }
    }

    /// Replace both raw inputs
    pub fn set_inputs(&self, inputs: RawInputs) {
        self.lock().set_inputs(inputs);
    }

    /// Replace inputs and evaluate in one critical section
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` that stopped the pipeline.
    pub fn evaluate_and_publish(
        &self,
        inputs: RawInputs,
        feedback: &dyn FeedbackChannel,
    ) -> Result<EvaluationResult, ValidationError> {
        let mut calculator = self.lock();
        calculator.set_inputs(inputs);
        calculator.calculate(feedback)
    }

    /// Evaluate whatever inputs are currently held
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` that stopped the pipeline.
    pub fn calculate(
        &self,
        feedback: &dyn FeedbackChannel,
    ) -> Result<EvaluationResult, ValidationError> {
        self.lock().calculate(feedback)
    }

    /// Copy of the held result
    #[must_use]
    pub fn result(&self) -> Option<EvaluationResult> {
        self.lock().result().copied()
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> CalculatorPhase {
        self.lock().phase()
    }

    fn lock(&self) -> MutexGuard<'_, BmiCalculator> {
        // Evaluation cannot leave the state half-written, so a poisoned lock is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
