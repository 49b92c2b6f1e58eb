// ABOUTME: Data models re-exported from iron-beast-core
// ABOUTME: Raw inputs, validated measurements, categories, and evaluation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use iron_beast_core::models::*;
