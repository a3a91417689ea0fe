//! Basic report artifact
//!
//! Total revenue followed by the per-region breakdown, regions in
//! alphabetical order.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use super::currency::format_currency;
use crate::app::services::analytics::metrics::GlobalMetrics;
use crate::app::services::analytics::rollups::RegionStats;
use crate::{Error, Result};

/// Render the basic report into a string.
pub fn render_basic_report(
    regions: &BTreeMap<String, RegionStats>,
    metrics: &GlobalMetrics,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total Revenue: {}", format_currency(metrics.total_revenue));
    let _ = writeln!(out);
    let _ = writeln!(out, "Sales by Region:");
    for (region, stats) in regions {
        let _ = writeln!(
            out,
            "{}: {} ({} transactions, {:.1}%)",
            region,
            format_currency(stats.revenue),
            stats.count,
            stats.share_percent
        );
    }

    out
}

/// Write the basic report artifact.
pub fn write_basic_report(
    path: &Path,
    regions: &BTreeMap<String, RegionStats>,
    metrics: &GlobalMetrics,
) -> Result<()> {
    let content = render_basic_report(regions, metrics);
    fs::write(path, content).map_err(|e| {
        Error::report_writing(
            format!("failed to write basic report to '{}'", path.display()),
            Box::new(e),
        )
    })?;

    info!("Basic report written to '{}'", path.display());
    Ok(())
}
