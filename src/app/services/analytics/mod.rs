//! Aggregate rollups over the final transaction set
//!
//! Pure functions building the multi-dimensional summaries consumed by the
//! report writers:
//! - [`rollups`] - region and daily rollups, peak sales day
//! - [`rankings`] - ranked customer/product lists and low performers
//! - [`metrics`] - global revenue totals and average order value
//!
//! All aggregation is single-pass per dimension with ordered maps for
//! display; nothing here mutates the transaction set.

pub mod metrics;
pub mod rankings;
pub mod rollups;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use metrics::{GlobalMetrics, global_metrics};
pub use rankings::{CustomerRank, ProductRank, low_performing_products, top_customers, top_products};
pub use rollups::{DailyStats, PeakDay, RegionStats, daily_trend, peak_sales_day, region_rollup};

use crate::app::models::Transaction;
use std::collections::BTreeMap;

/// All aggregates for one pipeline run
#[derive(Debug, Clone)]
pub struct SalesAnalytics {
    /// Region name to revenue/count rollup, alphabetical
    pub regions: BTreeMap<String, RegionStats>,
    /// Date to revenue/count rollup, chronological
    pub daily: BTreeMap<String, DailyStats>,
    /// Customers ranked by total spend
    pub top_customers: Vec<CustomerRank>,
    /// Products ranked by total revenue
    pub top_products: Vec<ProductRank>,
    /// Products below the low-quantity threshold, ascending
    pub low_products: Vec<ProductRank>,
    /// Highest-revenue day, if any transactions exist
    pub peak_day: Option<PeakDay>,
    /// Global revenue totals
    pub metrics: GlobalMetrics,
}

/// Build every aggregate in one call.
pub fn build_analytics(
    transactions: &[Transaction],
    top_n: usize,
    low_quantity_threshold: i64,
) -> SalesAnalytics {
    let daily = daily_trend(transactions);
    let peak_day = peak_sales_day(&daily);

    SalesAnalytics {
        regions: region_rollup(transactions),
        daily,
        top_customers: top_customers(transactions, top_n),
        top_products: top_products(transactions, top_n),
        low_products: low_performing_products(transactions, low_quantity_threshold),
        peak_day,
        metrics: global_metrics(transactions),
    }
}
