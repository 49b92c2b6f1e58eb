// ABOUTME: Intelligence module hosting the body-mass-index evaluation feature
// ABOUTME: Groups the validation, computation, classification, and presentation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Body-composition analysis for the facility website. Currently limited to
//! the BMI calculator.

/// Body-mass-index evaluation pipeline
pub mod bmi;

pub use bmi::{evaluate, evaluate_with_feedback, BmiCalculator, DisplayPayload, Presenter};
