// ABOUTME: Terminal rendering for BMI results, category tables, and toast notifications
// ABOUTME: Implements the feedback channel on stderr so stdout stays parseable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use iron_beast::feedback::FeedbackChannel;
use iron_beast::intelligence::bmi::{DisplayAccent, DisplayPayload};
use iron_beast::models::{BmiCategory, InputField, RawInputs};
use std::io::{self, Write};

const ANSI_RESET: &str = "\x1b[0m";

/// Feedback channel printing toasts to stderr
pub struct ConsoleFeedback {
    color: bool,
}

impl ConsoleFeedback {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn toast(&self, accent: DisplayAccent, marker: &str, message: &str) {
        let mut err = io::stderr().lock();
        // Nothing sensible to do if stderr itself is gone
        let _ = if self.color {
            writeln!(err, "{}{marker}{ANSI_RESET} {message}", accent.ansi_code())
        } else {
            writeln!(err, "{marker} {message}")
        };
    }
}

impl FeedbackChannel for ConsoleFeedback {
    fn notify_error(&self, message: &str) {
        self.toast(DisplayAccent::Red, "[error]", message);
    }

    fn notify_success(&self, message: &str) {
        self.toast(DisplayAccent::Green, "[ok]", message);
    }
}

/// Print a result card
pub fn render_payload(out: &mut impl Write, payload: &DisplayPayload, color: bool) -> io::Result<()> {
    writeln!(out, "YOUR BMI")?;
    writeln!(out, "{}", payload.bmi)?;
    if color {
        writeln!(
            out,
            "{}{}{ANSI_RESET}",
            payload.accent.ansi_code(),
            payload.category_label
        )?;
    } else {
        writeln!(out, "{}", payload.category_label)?;
    }
    writeln!(out, "{}", payload.guidance)
}

/// Print the category boundaries
pub fn render_categories(out: &mut impl Write, color: bool) -> io::Result<()> {
    writeln!(
        out,
        "BMI = weight ({}) / height (m)^2, height entered in {}",
        InputField::Weight.unit(),
        InputField::Height.unit()
    )?;
    for category in BmiCategory::all() {
        let range = match category.range() {
            (None, Some(upper)) => format!("below {upper:.1}"),
            (Some(lower), Some(upper)) => format!("{lower:.1} to below {upper:.1}"),
            (Some(lower), None) => format!("{lower:.1} and above"),
            (None, None) => "any".to_owned(),
        };
        let label = category.display_label();
        if color {
            let accent = DisplayAccent::for_category(category);
            writeln!(out, "  {}{label:<12}{ANSI_RESET} {range}", accent.ansi_code())?;
        } else {
            writeln!(out, "  {label:<12} {range}")?;
        }
    }
    Ok(())
}

/// Print the inputs typed so far, shown while no result exists
pub fn render_inputs(out: &mut impl Write, inputs: &RawInputs) -> io::Result<()> {
    writeln!(out, "no result yet")?;
    for field in [InputField::Height, InputField::Weight] {
        let value = inputs.get(field).trim();
        if value.is_empty() {
            writeln!(out, "  {:<8}(empty)", field.name())?;
        } else {
            writeln!(out, "  {:<8}{value} {}", field.name(), field.unit())?;
        }
    }
    Ok(())
}
