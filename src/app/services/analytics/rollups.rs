//! Region and daily rollups
//!
//! Ordered maps keep display order deterministic: regions alphabetically,
//! dates chronologically (ledger dates are ISO-style, so lexicographic
//! order is date order).

use std::collections::{BTreeMap, HashSet};

use crate::app::models::Transaction;

/// Revenue rollup for one region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionStats {
    /// Sum of transaction amounts in the region
    pub revenue: f64,
    /// Number of transactions in the region
    pub count: usize,
    /// Share of global revenue, as a percentage
    pub share_percent: f64,
}

/// Group transactions by region.
///
/// The sum of per-region revenue equals the global total by construction;
/// shares are computed against that total (zero revenue leaves all shares
/// at zero).
pub fn region_rollup(transactions: &[Transaction]) -> BTreeMap<String, RegionStats> {
    let mut rollup: BTreeMap<String, RegionStats> = BTreeMap::new();
    let mut total = 0.0;

    for transaction in transactions {
        let amount = transaction.amount();
        total += amount;

        let stats = rollup.entry(transaction.region.clone()).or_default();
        stats.revenue += amount;
        stats.count += 1;
    }

    if total > 0.0 {
        for stats in rollup.values_mut() {
            stats.share_percent = (stats.revenue / total) * 100.0;
        }
    }

    rollup
}

/// Revenue rollup for one day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyStats {
    /// Sum of transaction amounts on the day
    pub revenue: f64,
    /// Number of transactions on the day
    pub count: usize,
    /// Number of distinct customers active on the day
    pub unique_customers: usize,
}

/// Group transactions by date.
pub fn daily_trend(transactions: &[Transaction]) -> BTreeMap<String, DailyStats> {
    let mut accum: BTreeMap<String, (DailyStats, HashSet<String>)> = BTreeMap::new();

    for transaction in transactions {
        let (stats, customers) = accum.entry(transaction.date.clone()).or_default();
        stats.revenue += transaction.amount();
        stats.count += 1;
        customers.insert(transaction.customer_id.clone());
    }

    accum
        .into_iter()
        .map(|(date, (mut stats, customers))| {
            stats.unique_customers = customers.len();
            (date, stats)
        })
        .collect()
}

/// The day with the highest revenue
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDay {
    pub date: String,
    pub revenue: f64,
    pub count: usize,
}

/// Find the highest-revenue day; the earliest such day wins ties.
pub fn peak_sales_day(daily: &BTreeMap<String, DailyStats>) -> Option<PeakDay> {
    let mut peak: Option<PeakDay> = None;

    for (date, stats) in daily {
        let is_higher = peak
            .as_ref()
            .map(|current| stats.revenue > current.revenue)
            .unwrap_or(true);
        if is_higher {
            peak = Some(PeakDay {
                date: date.clone(),
                revenue: stats.revenue,
                count: stats.count,
            });
        }
    }

    peak
}
