//! Optional user-supplied constraints on valid records
//!
//! Filters apply only to records that already passed validation; they never
//! touch the validation counters. Constraints are conjunctive and absent
//! options impose nothing.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::models::Transaction;

/// Recognized filter options for a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Keep only this exact region
    pub region: Option<String>,
    /// Inclusive lower bound on the transaction amount
    pub min_amount: Option<f64>,
    /// Inclusive upper bound on the transaction amount
    pub max_amount: Option<f64>,
}

impl FilterOptions {
    /// True when no constraint is configured
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.min_amount.is_none() && self.max_amount.is_none()
    }

    /// Check a single transaction against all supplied constraints
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(region) = &self.region {
            if transaction.region != *region {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if transaction.amount() < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if transaction.amount() > max {
                return false;
            }
        }
        true
    }
}

/// Apply the configured filters to the valid record set.
///
/// Pure with respect to the records themselves; returns the satisfying
/// subset in its original order.
pub fn apply_filters(transactions: Vec<Transaction>, options: &FilterOptions) -> Vec<Transaction> {
    if options.is_empty() {
        return transactions;
    }

    let before = transactions.len();
    let kept: Vec<Transaction> = transactions
        .into_iter()
        .filter(|transaction| options.matches(transaction))
        .collect();

    info!(
        "Filtering complete: {} -> {} transactions",
        before,
        kept.len()
    );
    kept
}
