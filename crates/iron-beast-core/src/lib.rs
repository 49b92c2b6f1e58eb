// ABOUTME: Core types and constants for the Iron Beast body-mass-index evaluator
// ABOUTME: Foundation crate with error taxonomy, BMI constants, and the data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Iron Beast Core
//!
//! Foundation crate providing the shared types and constants for the BMI
//! evaluation feature. Nothing here performs computation beyond trivial
//! accessors; the pipeline itself lives in the `iron_beast` crate.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError`, `ConfigError`, and the stable `ErrorCode` table
//! - **constants**: Category thresholds, unit factors, and user-facing messages
//! - **models**: `RawInputs`, `BodyMeasurements`, `EvaluationResult`, `BmiCategory`

/// Error taxonomy for user-input validation and configuration loading
pub mod errors;

/// BMI thresholds, unit conversions, and feedback messages
pub mod constants;

/// Data model for raw inputs, validated measurements, and evaluation results
pub mod models;
