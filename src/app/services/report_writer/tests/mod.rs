//! Tests for report rendering and artifact writing


use crate::app::models::{Enrichment, Transaction};
use crate::app::services::analytics::{SalesAnalytics, build_analytics};
use crate::app::services::record_processor::stats::ValidationSummary;

/// Two-region transaction set used across rendering tests
pub fn fixture_transactions() -> Vec<Transaction> {
    let base = |id: &str, product: &str, region: &str, date: &str, qty: i64, price: f64| Transaction {
        transaction_id: id.to_string(),
        date: date.to_string(),
        product_id: "P101".to_string(),
        product_name: product.to_string(),
        quantity: qty,
        unit_price: price,
        customer_id: "C001".to_string(),
        region: region.to_string(),
        enrichment: Enrichment::default(),
    };

    vec![
        base("T001", "Laptop", "North", "2024-01-01", 1, 1000.0),
        base("T002", "Mouse", "South", "2024-01-02", 5, 30.0),
    ]
}

/// Analytics over the fixture set
pub fn fixture_analytics() -> SalesAnalytics {
    build_analytics(&fixture_transactions(), 5, 10)
}

/// Summary matching the fixture set
pub fn fixture_summary() -> ValidationSummary {
    let mut summary = ValidationSummary::new();
    for _ in 0..2 {
        summary.record_line();
        summary.record_valid();
    }
    summary
}
