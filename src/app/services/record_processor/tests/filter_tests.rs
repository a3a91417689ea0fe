//! Tests for the optional record filters

use super::make_regional;
use crate::app::services::record_processor::filter::{FilterOptions, apply_filters};

#[test]
fn test_empty_options_keep_everything() {
    let transactions = vec![
        make_regional("T001", "North", 1, 100.0),
        make_regional("T002", "South", 2, 50.0),
    ];

    let kept = apply_filters(transactions.clone(), &FilterOptions::default());
    assert_eq!(kept, transactions);
}

#[test]
fn test_region_exact_match() {
    let transactions = vec![
        make_regional("T001", "North", 1, 100.0),
        make_regional("T002", "South", 2, 50.0),
        make_regional("T003", "North", 3, 10.0),
    ];
    let options = FilterOptions {
        region: Some("North".to_string()),
        ..FilterOptions::default()
    };

    let kept = apply_filters(transactions, &options);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|tx| tx.region == "North"));
}

#[test]
fn test_region_match_is_not_fuzzy() {
    let transactions = vec![make_regional("T001", "North", 1, 100.0)];
    let options = FilterOptions {
        region: Some("north".to_string()),
        ..FilterOptions::default()
    };

    assert!(apply_filters(transactions, &options).is_empty());
}

#[test]
fn test_min_amount_is_inclusive() {
    // amounts: 100, 99.99
    let transactions = vec![
        make_regional("T001", "North", 1, 100.0),
        make_regional("T002", "North", 1, 99.99),
    ];
    let options = FilterOptions {
        min_amount: Some(100.0),
        ..FilterOptions::default()
    };

    let kept = apply_filters(transactions, &options);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].transaction_id, "T001");
}

#[test]
fn test_max_amount_is_inclusive() {
    let transactions = vec![
        make_regional("T001", "North", 1, 100.0),
        make_regional("T002", "North", 1, 100.01),
    ];
    let options = FilterOptions {
        max_amount: Some(100.0),
        ..FilterOptions::default()
    };

    let kept = apply_filters(transactions, &options);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].transaction_id, "T001");
}

#[test]
fn test_constraints_are_conjunctive() {
    let transactions = vec![
        make_regional("T001", "North", 1, 150.0), // region ok, amount ok
        make_regional("T002", "North", 1, 50.0),  // region ok, amount low
        make_regional("T003", "South", 1, 150.0), // amount ok, region wrong
    ];
    let options = FilterOptions {
        region: Some("North".to_string()),
        min_amount: Some(100.0),
        max_amount: Some(200.0),
    };

    let kept = apply_filters(transactions, &options);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].transaction_id, "T001");
}

#[test]
fn test_order_preserved() {
    let transactions = vec![
        make_regional("T003", "North", 1, 10.0),
        make_regional("T001", "North", 1, 20.0),
        make_regional("T002", "North", 1, 30.0),
    ];

    let kept = apply_filters(transactions, &FilterOptions::default());
    let ids: Vec<&str> = kept.iter().map(|tx| tx.transaction_id.as_str()).collect();
    assert_eq!(ids, vec!["T003", "T001", "T002"]);
}
