//! Tests for line splitting and candidate construction

use super::{raw_with_numbers, valid_line};
use crate::app::models::RejectReason;
use crate::app::services::sales_parser::record_parser::{parse_candidate, split_line};

#[test]
fn test_split_valid_line() {
    let raw = split_line(valid_line()).unwrap();

    assert_eq!(raw.transaction_id, "T001");
    assert_eq!(raw.date, "2024-01-15");
    assert_eq!(raw.product_id, "P101");
    assert_eq!(raw.product_name, "Laptop");
    assert_eq!(raw.quantity, "2");
    assert_eq!(raw.unit_price, "45000.00");
    assert_eq!(raw.customer_id, "C001");
    assert_eq!(raw.region, "North");
}

#[test]
fn test_split_trims_field_whitespace() {
    let raw = split_line(" T001 | 2024-01-15 |P101| Laptop |2| 10.0 |C001| North ").unwrap();

    assert_eq!(raw.transaction_id, "T001");
    assert_eq!(raw.product_name, "Laptop");
    assert_eq!(raw.region, "North");
}

#[test]
fn test_split_rejects_too_few_fields() {
    assert!(split_line("T001|2024-01-15|P101|Laptop").is_none());
}

#[test]
fn test_split_rejects_too_many_fields() {
    assert!(split_line("T001|2024-01-15|P101|Laptop|2|10.0|C001|North|extra").is_none());
}

#[test]
fn test_split_rejects_empty_line() {
    // An empty line splits into a single empty field, not eight
    assert!(split_line("").is_none());
}

#[test]
fn test_parse_candidate_builds_transaction() {
    let tx = parse_candidate(raw_with_numbers("2", "45000.00")).unwrap();

    assert_eq!(tx.quantity, 2);
    assert_eq!(tx.unit_price, 45000.0);
    assert_eq!(tx.amount(), 90000.0);
    assert!(!tx.enrichment.matched);
}

#[test]
fn test_parse_candidate_strips_grouping_separators() {
    let tx = parse_candidate(raw_with_numbers("1,916", "1,250.50")).unwrap();

    assert_eq!(tx.quantity, 1916);
    assert_eq!(tx.unit_price, 1250.5);
}

#[test]
fn test_parse_candidate_cleans_product_name() {
    let mut raw = raw_with_numbers("1", "10.0");
    raw.product_name = "Mouse,Wireless".to_string();

    let tx = parse_candidate(raw).unwrap();
    assert_eq!(tx.product_name, "MouseWireless");
}

#[test]
fn test_parse_candidate_rejects_bad_quantity() {
    let result = parse_candidate(raw_with_numbers("two", "10.0"));
    assert_eq!(result.unwrap_err(), RejectReason::MalformedNumeric);
}

#[test]
fn test_parse_candidate_rejects_bad_price() {
    let result = parse_candidate(raw_with_numbers("2", "ten"));
    assert_eq!(result.unwrap_err(), RejectReason::MalformedNumeric);
}

#[test]
fn test_parse_candidate_rejects_empty_numeric() {
    let result = parse_candidate(raw_with_numbers("", "10.0"));
    assert_eq!(result.unwrap_err(), RejectReason::MalformedNumeric);
}

#[test]
fn test_negative_values_parse_and_defer_to_validation() {
    // Sign problems are a validation concern, not a parse failure
    let tx = parse_candidate(raw_with_numbers("-3", "-1.5")).unwrap();
    assert_eq!(tx.quantity, -3);
    assert_eq!(tx.unit_price, -1.5);
}
