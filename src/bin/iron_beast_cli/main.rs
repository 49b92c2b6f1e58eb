// ABOUTME: Iron Beast CLI - terminal front end for the BMI calculator
// ABOUTME: Binds raw height/weight input, triggers evaluation, and renders results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # One-shot evaluation
//! iron-beast-cli calculate --height 175 --weight 70
//!
//! # Same, as JSON for scripting
//! iron-beast-cli calculate --height 175 --weight 70 --json
//!
//! # Print the category table
//! iron-beast-cli categories
//!
//! # Line-driven session (height <cm>, weight <kg>, calculate, show, quit)
//! iron-beast-cli interactive
//! ```

mod console;
mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use iron_beast::config::AppConfig;
use iron_beast::constants::service_names;
use iron_beast::intelligence::bmi::{evaluate_with_feedback, BmiCalculator, Presenter};
use iron_beast::logging::{AppLogger, LoggingConfig};
use iron_beast::models::RawInputs;
use std::io::{self, Write};
use std::process::ExitCode;

use console::{render_categories, render_payload, ConsoleFeedback};

/// Exit status when the inputs are rejected by validation
const EXIT_VALIDATION_FAILED: u8 = 2;

#[derive(Parser)]
#[command(
    name = "iron-beast-cli",
    about = "Iron Beast Gym BMI calculator",
    long_about = "Calculate body-mass-index from height (cm) and weight (kg) and show the weight-status category with guidance."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Disable colored category labels
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single height/weight pair
    Calculate {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Print the result as JSON instead of a result card
        #[arg(long)]
        json: bool,
    },

    /// Print the BMI category table
    Categories,

    /// Start a line-driven calculator session on stdin
    Interactive,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AppConfig::from_env()?;
    AppLogger::log_service_start(service_names::IRON_BEAST_CLI, &config.presentation.facility_name);

    let presenter = Presenter::new(config.presentation);
    let color = !cli.no_color;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Calculate {
            height,
            weight,
            json,
        } => {
            let feedback = ConsoleFeedback::new(color && !json);
            let inputs = RawInputs::new(height, weight);
            match evaluate_with_feedback(&inputs, &feedback) {
                Ok(result) => {
                    let payload = presenter.present(&result);
                    if json {
                        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
                    } else {
                        render_payload(&mut out, &payload, color)?;
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(error) => {
                    if json {
                        let body = serde_json::json!({
                            "error": {
                                "code": error.code(),
                                "kind": error.kind(),
                                "field": error.field(),
                                "message": error.user_message(),
                            }
                        });
                        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
                    }
                    Ok(ExitCode::from(EXIT_VALIDATION_FAILED))
                }
            }
        }
        Command::Categories => {
            render_categories(&mut out, color)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Interactive => {
            let feedback = ConsoleFeedback::new(color);
            let mut calculator = BmiCalculator::new(presenter);
            let stdin = io::stdin();
            interactive::run(&mut calculator, stdin.lock(), &mut out, &feedback, color)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
