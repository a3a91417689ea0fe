//! Tests for region and daily rollups

use super::{tx, two_region_fixture};
use crate::app::services::analytics::rollups::{daily_trend, peak_sales_day, region_rollup};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn test_region_rollup_totals() {
    let rollup = region_rollup(&two_region_fixture());

    assert_eq!(rollup.len(), 2);
    let north = &rollup["North"];
    assert_close(north.revenue, 1250.0);
    assert_eq!(north.count, 3);

    let south = &rollup["South"];
    assert_close(south.revenue, 350.0);
    assert_eq!(south.count, 2);
}

#[test]
fn test_region_revenue_sums_to_global_total() {
    let transactions = two_region_fixture();
    let rollup = region_rollup(&transactions);

    let regional_sum: f64 = rollup.values().map(|stats| stats.revenue).sum();
    let global: f64 = transactions.iter().map(|t| t.amount()).sum();
    assert_close(regional_sum, global);
}

#[test]
fn test_region_shares_sum_to_hundred() {
    let rollup = region_rollup(&two_region_fixture());
    let share_sum: f64 = rollup.values().map(|stats| stats.share_percent).sum();
    assert_close(share_sum, 100.0);

    assert_close(rollup["North"].share_percent, 1250.0 / 1600.0 * 100.0);
}

#[test]
fn test_region_rollup_alphabetical_order() {
    let transactions = vec![
        tx("C001", "a", "West", "2024-01-01", 1, 1.0),
        tx("C001", "a", "East", "2024-01-01", 1, 1.0),
        tx("C001", "a", "North", "2024-01-01", 1, 1.0),
    ];

    let rollup = region_rollup(&transactions);
    let regions: Vec<&String> = rollup.keys().collect();
    let names: Vec<&str> = regions.iter().map(|r| r.as_str()).collect();
    assert_eq!(names, vec!["East", "North", "West"]);
}

#[test]
fn test_empty_rollup() {
    assert!(region_rollup(&[]).is_empty());
    assert!(daily_trend(&[]).is_empty());
    assert!(peak_sales_day(&daily_trend(&[])).is_none());
}

#[test]
fn test_daily_trend_chronological_with_unique_customers() {
    let daily = daily_trend(&two_region_fixture());

    let dates: Vec<&str> = daily.keys().map(|d| d.as_str()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);

    let day_one = &daily["2024-01-01"];
    assert_close(day_one.revenue, 1150.0);
    assert_eq!(day_one.count, 2);
    assert_eq!(day_one.unique_customers, 2);

    // C001 appears twice on no day; day two has two distinct customers
    let day_two = &daily["2024-01-02"];
    assert_eq!(day_two.unique_customers, 2);
}

#[test]
fn test_unique_customers_deduplicated_within_day() {
    let transactions = vec![
        tx("C001", "a", "North", "2024-01-01", 1, 10.0),
        tx("C001", "b", "North", "2024-01-01", 1, 10.0),
        tx("C002", "c", "North", "2024-01-01", 1, 10.0),
    ];

    let daily = daily_trend(&transactions);
    assert_eq!(daily["2024-01-01"].unique_customers, 2);
    assert_eq!(daily["2024-01-01"].count, 3);
}

#[test]
fn test_peak_sales_day() {
    let daily = daily_trend(&two_region_fixture());
    let peak = peak_sales_day(&daily).unwrap();

    assert_eq!(peak.date, "2024-01-01");
    assert_close(peak.revenue, 1150.0);
    assert_eq!(peak.count, 2);
}

#[test]
fn test_peak_day_tie_goes_to_earliest() {
    let transactions = vec![
        tx("C001", "a", "North", "2024-01-02", 1, 100.0),
        tx("C001", "a", "North", "2024-01-01", 1, 100.0),
    ];

    let peak = peak_sales_day(&daily_trend(&transactions)).unwrap();
    assert_eq!(peak.date, "2024-01-01");
}
