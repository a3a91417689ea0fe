//! Command-line argument definitions for the sales processor
//!
//! Defines the CLI interface using the clap derive API. Running with no
//! subcommand performs the full pipeline with default settings; validation
//! rejections never affect the exit status.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::services::record_processor::filter::FilterOptions;
use crate::config::Config;
use crate::constants::DEFAULT_TOP_N;

/// CLI arguments for the sales ledger processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-processor",
    version,
    about = "Process a pipe-delimited sales ledger into validated reports",
    long_about = "Reads a pipe-delimited sales ledger, validates and normalizes every \
                  record, enriches valid transactions with product metadata from a local \
                  table and a remote catalog, and writes an enriched data file plus basic \
                  and full analytics reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Resolve the effective command; no subcommand means a default
    /// full-pipeline run.
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Process(ProcessArgs::default()))
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write all artifacts (default command)
    Process(ProcessArgs),
    /// Parse and validate only; print the validation summary
    Validate(ValidateArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path to the pipe-delimited sales ledger
    ///
    /// Defaults to data/sales_data.txt relative to the working directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the sales ledger"
    )]
    pub input_path: Option<PathBuf>,

    /// Output directory for generated artifacts
    ///
    /// Will be created if it doesn't exist. Receives report.txt,
    /// full_report.txt and enriched_sales_data.txt.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated artifacts"
    )]
    pub output_path: Option<PathBuf>,

    /// Keep only transactions from this exact region
    #[arg(long = "region", value_name = "NAME", help = "Keep only this region")]
    pub region: Option<String>,

    /// Inclusive lower bound on the transaction amount
    #[arg(
        long = "min-amount",
        value_name = "AMOUNT",
        help = "Keep only amounts at or above this value"
    )]
    pub min_amount: Option<f64>,

    /// Inclusive upper bound on the transaction amount
    #[arg(
        long = "max-amount",
        value_name = "AMOUNT",
        help = "Keep only amounts at or below this value"
    )]
    pub max_amount: Option<f64>,

    /// Skip the remote catalog fetch and enrich from the local table only
    #[arg(long = "offline", help = "Skip the remote catalog fetch")]
    pub offline: bool,

    /// Length of the ranked customer/product lists in the full report
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_TOP_N,
        help = "Length of the ranked lists"
    )]
    pub top: usize,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            region: None,
            min_amount: None,
            max_amount: None,
            offline: false,
            top: DEFAULT_TOP_N,
            verbose: false,
        }
    }
}

impl ProcessArgs {
    /// Log level implied by the flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the run configuration from the supplied arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default().with_top_n(self.top).with_filters(FilterOptions {
            region: self.region.clone(),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
        });

        if let Some(input) = &self.input_path {
            config = config.with_input(input.clone());
        }
        if let Some(output) = &self.output_path {
            config = config.with_output_dir(output.clone());
        }
        if self.offline {
            config = config.offline();
        }

        config
    }
}

/// Arguments for the validate command
#[derive(Debug, Clone, Default, Parser)]
pub struct ValidateArgs {
    /// Input path to the pipe-delimited sales ledger
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the sales ledger"
    )]
    pub input_path: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,
}

impl ValidateArgs {
    /// Log level implied by the flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
