// ABOUTME: Feedback channel abstraction for success and error notifications
// ABOUTME: Tracing-backed and in-memory recording implementations for hosts and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feedback Channel
//!
//! The evaluation pipeline never renders notifications itself. It requests
//! them through a [`FeedbackChannel`] passed in by the host, which decides
//! whether they become toasts, terminal lines, or log events.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Sink for user-facing notifications
pub trait FeedbackChannel: Send + Sync {
    /// Report a recoverable user-input problem
    fn notify_error(&self, message: &str);

    /// Report a completed evaluation
    fn notify_success(&self, message: &str);
}

/// Feedback channel that turns notifications into tracing events.
///
/// Errors are user-input problems, not faults, so they go out at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl FeedbackChannel for TracingFeedback {
    fn notify_error(&self, message: &str) {
        debug!(feedback.kind = "error", feedback.message = %message, "User feedback");
    }

    fn notify_success(&self, message: &str) {
        info!(feedback.kind = "success", feedback.message = %message, "User feedback");
    }
}

/// A notification captured by [`RecordingFeedback`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notification {
    /// Requested through `notify_error`
    Error(String),
    /// Requested through `notify_success`
    Success(String),
}

/// Feedback channel that keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingFeedback {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Messages passed to `notify_error`
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|notification| match notification {
                Notification::Error(message) => Some(message.clone()),
                Notification::Success(_) => None,
            })
            .collect()
    }

    /// Messages passed to `notify_success`
    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|notification| match notification {
                Notification::Success(message) => Some(message.clone()),
                Notification::Error(_) => None,
            })
            .collect()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // A panicking test thread must not hide earlier notifications
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl FeedbackChannel for RecordingFeedback {
    fn notify_error(&self, message: &str) {
        self.lock().push(Notification::Error(message.to_owned()));
    }

    fn notify_success(&self, message: &str) {
        self.lock().push(Notification::Success(message.to_owned()));
    }
}
