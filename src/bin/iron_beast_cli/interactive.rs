// ABOUTME: Line-driven calculator session standing in for the web form bindings
// ABOUTME: Edits raw inputs per line and evaluates only on an explicit calculate command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::console::{render_inputs, render_payload};
use iron_beast::feedback::FeedbackChannel;
use iron_beast::intelligence::bmi::BmiCalculator;
use iron_beast::models::InputField;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "commands: height <cm> | weight <kg> | calculate | show | help | quit";

/// One parsed input line
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Set(InputField, &'a str),
    Calculate,
    Show,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Option<SessionCommand<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = match word.to_lowercase().as_str() {
        "height" | "h" => SessionCommand::Set(InputField::Height, rest.trim()),
        "weight" | "w" => SessionCommand::Set(InputField::Weight, rest.trim()),
        "calculate" | "calc" | "c" => SessionCommand::Calculate,
        "show" | "s" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(word),
    };
    Some(command)
}

/// Drive a calculator from `input` until EOF or `quit`
pub fn run(
    calculator: &mut BmiCalculator,
    input: impl BufRead,
    out: &mut impl Write,
    feedback: &dyn FeedbackChannel,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_line(&line) else {
            continue;
        };
        debug!(?command, "Session command");
        match command {
            SessionCommand::Set(field, value) => calculator.set_field(field, value),
            SessionCommand::Calculate => {
                // Failures were already reported through the feedback channel
                if calculator.calculate(feedback).is_ok() {
                    if let Some(payload) = calculator.display() {
                        render_payload(out, &payload, color)?;
                    }
                }
            }
            SessionCommand::Show => match calculator.display() {
                Some(payload) => render_payload(out, &payload, color)?,
                None => render_inputs(out, calculator.inputs())?,
            },
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(word) => writeln!(out, "unknown command '{word}'; {HELP}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use iron_beast::feedback::RecordingFeedback;
    use iron_beast::intelligence::bmi::CalculatorPhase;
    use iron_beast::models::BmiCategory;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("height 175"),
            Some(SessionCommand::Set(InputField::Height, "175"))
        );
        assert_eq!(
            parse_line("  W   70.5 "),
            Some(SessionCommand::Set(InputField::Weight, "70.5"))
        );
        assert_eq!(parse_line("weight"), Some(SessionCommand::Set(InputField::Weight, "")));
        assert_eq!(parse_line("calc"), Some(SessionCommand::Calculate));
        assert_eq!(parse_line("bogus"), Some(SessionCommand::Unknown("bogus")));
        assert_eq!(parse_line("   "), None);
    }

    #[test]
    fn test_failed_calculation_keeps_previous_result() {
        let mut calculator = BmiCalculator::default();
        let feedback = RecordingFeedback::new();
        let script = "height 175\nweight 70\ncalculate\nweight -5\ncalculate\nshow\nquit\nheight 1\n";
        let mut out = Vec::new();

        run(&mut calculator, script.as_bytes(), &mut out, &feedback, false).unwrap();

        let result = calculator.result().copied().unwrap();
        assert_eq!(result.category(), BmiCategory::Normal);
        assert_eq!(calculator.phase(), CalculatorPhase::ShowingError);
        // Lines after quit are ignored
        assert_eq!(calculator.inputs().height, "175");
        assert_eq!(
            feedback.errors(),
            vec!["Please enter valid values".to_owned()]
        );
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("22.9").count(), 2);
    }

    #[test]
    fn test_show_before_calculate_lists_inputs() {
        let mut calculator = BmiCalculator::default();
        let feedback = RecordingFeedback::new();
        let mut out = Vec::new();

        run(&mut calculator, "weight 70\nshow\n".as_bytes(), &mut out, &feedback, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("no result yet\n  height  (empty)\n  weight  70 kg\n"));
        assert!(feedback.notifications().is_empty());
    }
}
