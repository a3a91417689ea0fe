//! Tests for the aggregate rollups

pub mod rollup_tests;

use crate::app::models::{Enrichment, Transaction};

/// Build a transaction from the dimensions the aggregates care about
pub fn tx(
    customer_id: &str,
    product_name: &str,
    region: &str,
    date: &str,
    quantity: i64,
    unit_price: f64,
) -> Transaction {
    Transaction {
        transaction_id: "T001".to_string(),
        date: date.to_string(),
        product_id: "P101".to_string(),
        product_name: product_name.to_string(),
        quantity,
        unit_price,
        customer_id: customer_id.to_string(),
        region: region.to_string(),
        enrichment: Enrichment::default(),
    }
}

/// Five valid transactions across two regions, matching the end-to-end
/// fixture: North 3 transactions for 1250.0, South 2 for 350.0.
pub fn two_region_fixture() -> Vec<Transaction> {
    vec![
        tx("C001", "Laptop", "North", "2024-01-01", 1, 1000.0),
        tx("C002", "Mouse", "North", "2024-01-01", 5, 30.0),
        tx("C001", "Keyboard", "North", "2024-01-02", 2, 50.0),
        tx("C003", "Monitor", "South", "2024-01-02", 1, 300.0),
        tx("C002", "Cable", "South", "2024-01-03", 10, 5.0),
    ]
}
