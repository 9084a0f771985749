//! ForgeOps CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Configuration validation failure
//! - 4: Template error
//! - 5: Generation error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const GENERATION_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let forge_level = if cli.verbose { "forge=debug" } else { "forge=info" };
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive(forge_level.parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::ListOptions => commands::list_options::execute(),
        Commands::SmokeTemplates(args) => commands::smoke_templates::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<forge_config::ValidationError>().is_some() {
        return ExitCodes::VALIDATION_FAILURE;
    }
    if e.downcast_ref::<forge_templates::TemplateError>().is_some() {
        return ExitCodes::TEMPLATE_ERROR;
    }
    if let Some(gen) = e.downcast_ref::<forge_generator::GenerationError>() {
        return match gen {
            forge_generator::GenerationError::Template { .. } => ExitCodes::TEMPLATE_ERROR,
            forge_generator::GenerationError::Io { .. } => ExitCodes::GENERATION_ERROR,
        };
    }
    ExitCodes::GENERAL_ERROR
}
