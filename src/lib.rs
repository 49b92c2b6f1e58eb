// ABOUTME: Main library entry point for the Iron Beast BMI evaluator
// ABOUTME: Exposes the evaluation pipeline, feedback channel, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Iron Beast
//!
//! Body-mass-index evaluation for the Iron Beast Gym website. The website
//! itself is static presentation; this crate holds the one piece with logic:
//! turning user-typed height and weight into a BMI, a weight-status category,
//! and the guidance shown with it.
//!
//! ## Architecture
//!
//! - **Intelligence**: the validate, compute, classify, present pipeline
//! - **Feedback**: the injected notification channel used for toasts
//! - **Config**: environment-driven wording and logging settings
//! - **Logging**: `tracing` subscriber setup and structured events
//!
//! ## Example Usage
//!
//! ```rust
//! use iron_beast::feedback::RecordingFeedback;
//! use iron_beast::intelligence::bmi::{evaluate_with_feedback, present};
//! use iron_beast::models::{BmiCategory, RawInputs};
//!
//! let feedback = RecordingFeedback::new();
//! let result = evaluate_with_feedback(&RawInputs::new("175", "70"), &feedback)?;
//!
//! assert_eq!(result.category(), BmiCategory::Normal);
//! assert_eq!(present(&result).bmi, "22.9");
//! # Ok::<(), iron_beast::errors::ValidationError>(())
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants (thresholds, units, messages)
pub mod constants;

/// Validation and configuration error types
pub mod errors;

/// Notification channel abstraction and implementations
pub mod feedback;

/// BMI evaluation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Raw inputs, measurements, categories, and results
pub mod models;
