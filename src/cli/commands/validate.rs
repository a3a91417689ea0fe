//! Validate command: parse and validate without writing artifacts
//!
//! Useful for checking a ledger before a full run. Prints the per-reason
//! rejection breakdown and flags an inconsistent summary (which would
//! indicate an accounting bug, not bad data).

use std::path::PathBuf;
use tracing::info;

use crate::Result;
use crate::app::adapters::filesystem;
use crate::app::services::record_processor::{RecordProcessor, ValidationSummary};
use crate::cli::args::ValidateArgs;
use crate::constants::DEFAULT_INPUT_FILE;

use super::shared::{print_validation_summary, setup_logging};

/// Run validation only.
pub async fn run_validate(args: ValidateArgs) -> Result<ValidationSummary> {
    setup_logging(args.get_log_level())?;

    let input_path = args
        .input_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));

    info!("Validating ledger '{}'", input_path.display());
    let lines = filesystem::read_sales_lines(&input_path)?;
    let result = RecordProcessor::new().process_lines(&lines);

    println!();
    print_validation_summary(&result.summary);

    debug_assert!(result.is_consistent());
    Ok(result.summary)
}
