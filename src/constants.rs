// ABOUTME: Application constants re-exported from iron-beast-core
// ABOUTME: BMI thresholds, unit factors, messages, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use iron_beast_core::constants::*;
