//! Tests for the record processing pipeline
//!
//! Shared fixtures for validator, filter, stats and processor tests.

pub mod filter_tests;

use crate::app::models::{Enrichment, Transaction};

/// Create a fully valid transaction with the given overridable core fields
pub fn make_transaction(
    transaction_id: &str,
    product_id: &str,
    customer_id: &str,
    quantity: i64,
    unit_price: f64,
) -> Transaction {
    Transaction {
        transaction_id: transaction_id.to_string(),
        date: "2024-01-15".to_string(),
        product_id: product_id.to_string(),
        product_name: "Laptop".to_string(),
        quantity,
        unit_price,
        customer_id: customer_id.to_string(),
        region: "North".to_string(),
        enrichment: Enrichment::default(),
    }
}

/// Valid transaction in the given region with the given amount components
pub fn make_regional(transaction_id: &str, region: &str, quantity: i64, unit_price: f64) -> Transaction {
    let mut tx = make_transaction(transaction_id, "P101", "C001", quantity, unit_price);
    tx.region = region.to_string();
    tx
}

/// Render a ledger line from eight field values
pub fn ledger_line(fields: [&str; 8]) -> String {
    fields.join("|")
}
