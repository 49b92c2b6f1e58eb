// ABOUTME: Configuration management module for environment-driven settings
// ABOUTME: Aggregates presentation wording and logging options into AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Iron Beast BMI evaluator
//!
//! Configuration is read from environment variables only:
//!
//! - **Presentation**: facility name used in call-to-action guidance
//! - **Logging**: level, output format, and service metadata
//!
//! BMI thresholds and the rounding rule are fixed constants and cannot be
//! overridden.

/// Environment variable loading for all configuration sections
pub mod environment;

pub use environment::{AppConfig, PresentationConfig};
