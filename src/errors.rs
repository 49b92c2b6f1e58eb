// ABOUTME: Error types re-exported from iron-beast-core
// ABOUTME: Preserves crate::errors import paths for the pipeline and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Validation and configuration errors live in `iron-beast-core`; this module
//! re-exports them so the rest of the crate imports from `crate::errors`.

pub use iron_beast_core::errors::*;
