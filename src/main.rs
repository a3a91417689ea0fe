use clap::Parser;
use sales_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments; no subcommand means a default full run
    let args = Args::parse();

    // Create async runtime for the pipeline (the catalog fetch is the only
    // async operation; everything else is a single-threaded batch pass)
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_summary) => {
            // Validation rejections are routine and already reported;
            // only infrastructure failures are execution failures
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
