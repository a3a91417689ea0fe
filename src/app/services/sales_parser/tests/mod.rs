//! Tests for the sales line parser
//!
//! Covers line splitting, field cleaning and numeric normalization.

pub mod record_parser_tests;

use crate::app::models::RawRecord;

/// A fully well-formed ledger line
pub fn valid_line() -> &'static str {
    "T001|2024-01-15|P101|Laptop|2|45000.00|C001|North"
}

/// Build a raw record with the given numeric field values
pub fn raw_with_numbers(quantity: &str, unit_price: &str) -> RawRecord {
    RawRecord {
        transaction_id: "T001".to_string(),
        date: "2024-01-15".to_string(),
        product_id: "P101".to_string(),
        product_name: "Laptop".to_string(),
        quantity: quantity.to_string(),
        unit_price: unit_price.to_string(),
        customer_id: "C001".to_string(),
        region: "North".to_string(),
    }
}
