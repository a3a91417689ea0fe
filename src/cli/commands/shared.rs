//! Shared helpers for CLI commands
//!
//! Logging setup and the colored console summary printed after a run.

use colored::*;
use tracing::debug;

use crate::Result;
use crate::app::services::analytics::SalesAnalytics;
use crate::app::services::record_processor::ValidationSummary;
use crate::app::services::report_writer::format_currency;

/// Set up structured logging on stderr.
///
/// `RUST_LOG` overrides the level implied by the CLI flags.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Print the validation summary breakdown.
pub fn print_validation_summary(summary: &ValidationSummary) {
    println!("{}", "Validation Summary".bold());
    println!("  Lines read:     {}", summary.total_lines);
    println!("  Valid:          {}", summary.valid.to_string().green());
    println!("  Skipped:        {}", summary.skipped);

    let rejected = summary.rejected_total();
    if rejected > 0 {
        println!("  Rejected:       {}", rejected.to_string().yellow());
        for reason in crate::app::models::RejectReason::ALL {
            let count = summary.rejection_count(reason);
            if count > 0 {
                println!("    {} {}", count, reason);
            }
        }
    } else {
        println!("  Rejected:       0");
    }
}

/// Print the end-of-run console summary.
pub fn print_run_summary(
    summary: &ValidationSummary,
    analytics: &SalesAnalytics,
    enriched_count: usize,
    matched_count: usize,
) {
    println!();
    println!("{}", "Sales processing complete".green().bold());
    print_validation_summary(summary);
    println!("{}", "Results".bold());
    println!(
        "  Total revenue:  {}",
        format_currency(analytics.metrics.total_revenue)
    );
    println!("  Regions:        {}", analytics.regions.len());
    println!(
        "  Enriched:       {}/{} matched",
        matched_count, enriched_count
    );
    println!();
}
