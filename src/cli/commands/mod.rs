//! Command implementations for the sales processor CLI
//!
//! Each command lives in its own module; [`run`] dispatches on the parsed
//! arguments and returns the validation summary of the pass, which `main`
//! maps to the process exit status.

pub mod process;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::app::services::record_processor::ValidationSummary;
use crate::cli::args::{Args, Commands};

/// Main command runner.
///
/// Dispatches to the subcommand handler; a missing subcommand runs the
/// full pipeline with defaults.
pub async fn run(args: Args) -> Result<ValidationSummary> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
    }
}
