//! Full analytics report artifact
//!
//! A timestamped, section-delimited report covering daily trends, ranked
//! customers and products, and performance metrics. Sections are framed by
//! fixed-width rule lines.

use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use super::currency::format_currency;
use crate::app::services::analytics::SalesAnalytics;
use crate::app::services::record_processor::stats::ValidationSummary;
use crate::constants::REPORT_RULE_WIDTH;
use crate::{Error, Result};

/// Render the full report with the given generation timestamp.
pub fn render_full_report(
    analytics: &SalesAnalytics,
    summary: &ValidationSummary,
    generated_at: DateTime<Local>,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(REPORT_RULE_WIDTH);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SALES ANALYTICS REPORT");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{}", rule);

    push_section(&mut out, "DAILY SALES TREND");
    if analytics.daily.is_empty() {
        let _ = writeln!(out, "No transactions.");
    }
    for (date, stats) in &analytics.daily {
        let _ = writeln!(
            out,
            "{}: {} ({} transactions, {} customers)",
            date,
            format_currency(stats.revenue),
            stats.count,
            stats.unique_customers
        );
    }

    push_section(&mut out, "TOP CUSTOMERS");
    for (position, customer) in analytics.top_customers.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}: {} ({} orders, avg {})",
            position + 1,
            customer.customer_id,
            format_currency(customer.total_spent),
            customer.purchase_count,
            format_currency(customer.avg_order_value)
        );
    }

    push_section(&mut out, "TOP PRODUCTS");
    for (position, product) in analytics.top_products.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}: {} ({} units)",
            position + 1,
            product.product_name,
            format_currency(product.total_revenue),
            product.total_quantity
        );
    }

    push_section(&mut out, "PERFORMANCE METRICS");
    let _ = writeln!(
        out,
        "Total revenue: {}",
        format_currency(analytics.metrics.total_revenue)
    );
    let _ = writeln!(
        out,
        "Transactions: {}",
        analytics.metrics.transaction_count
    );
    let _ = writeln!(
        out,
        "Average order value: {}",
        format_currency(analytics.metrics.average_order_value)
    );
    if let Some(peak) = &analytics.peak_day {
        let _ = writeln!(
            out,
            "Peak sales day: {} with {} over {} transactions",
            peak.date,
            format_currency(peak.revenue),
            peak.count
        );
    }
    let _ = writeln!(
        out,
        "Validation: {} lines, {} valid, {} skipped, {} rejected",
        summary.total_lines,
        summary.valid,
        summary.skipped,
        summary.rejected_total()
    );
    if !analytics.low_products.is_empty() {
        let _ = writeln!(out, "Low performing products:");
        for product in &analytics.low_products {
            let _ = writeln!(
                out,
                "  {} ({} units, {})",
                product.product_name,
                product.total_quantity,
                format_currency(product.total_revenue)
            );
        }
    }

    let _ = writeln!(out, "{}", rule);
    out
}

fn push_section(out: &mut String, title: &str) {
    let rule = "-".repeat(REPORT_RULE_WIDTH);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", rule);
}

/// Write the full report artifact, stamped with the current local time.
pub fn write_full_report(
    path: &Path,
    analytics: &SalesAnalytics,
    summary: &ValidationSummary,
) -> Result<()> {
    let content = render_full_report(analytics, summary, Local::now());
    fs::write(path, content).map_err(|e| {
        Error::report_writing(
            format!("failed to write full report to '{}'", path.display()),
            Box::new(e),
        )
    })?;

    info!("Full report written to '{}'", path.display());
    Ok(())
}
