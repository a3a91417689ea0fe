//! Validation counters and result structures
//!
//! The [`ValidationSummary`] is owned by the record processor during a run
//! and read-only thereafter. Its central invariant:
//! `total_lines = skipped + rejected_total() + valid`.

use crate::app::models::{RejectReason, Transaction};

/// Counters for one validation pass over the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Total data lines seen
    pub total_lines: usize,
    /// Lines discarded for malformed structure (wrong field count)
    pub skipped: usize,
    /// Rejections: transaction id missing the "T" prefix
    pub bad_transaction_id: usize,
    /// Rejections: product id missing the "P" prefix
    pub bad_product_id: usize,
    /// Rejections: customer id missing the "C" prefix
    pub bad_customer_id: usize,
    /// Rejections: zero or negative quantity
    pub non_positive_quantity: usize,
    /// Rejections: zero or negative unit price
    pub non_positive_price: usize,
    /// Rejections: numeric field unparseable after separator stripping
    pub malformed_numeric: usize,
    /// Lines accepted as valid transactions
    pub valid: usize,
}

impl ValidationSummary {
    /// Create new empty validation counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one data line entering the pipeline
    pub fn record_line(&mut self) {
        self.total_lines += 1;
    }

    /// Count one structural skip
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Count one rejection under its attributed reason
    pub fn record_rejection(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::BadTransactionId => self.bad_transaction_id += 1,
            RejectReason::BadProductId => self.bad_product_id += 1,
            RejectReason::BadCustomerId => self.bad_customer_id += 1,
            RejectReason::NonPositiveQuantity => self.non_positive_quantity += 1,
            RejectReason::NonPositivePrice => self.non_positive_price += 1,
            RejectReason::MalformedNumeric => self.malformed_numeric += 1,
        }
    }

    /// Count one accepted transaction
    pub fn record_valid(&mut self) {
        self.valid += 1;
    }

    /// Rejection count for a single reason
    pub fn rejection_count(&self, reason: RejectReason) -> usize {
        match reason {
            RejectReason::BadTransactionId => self.bad_transaction_id,
            RejectReason::BadProductId => self.bad_product_id,
            RejectReason::BadCustomerId => self.bad_customer_id,
            RejectReason::NonPositiveQuantity => self.non_positive_quantity,
            RejectReason::NonPositivePrice => self.non_positive_price,
            RejectReason::MalformedNumeric => self.malformed_numeric,
        }
    }

    /// Total rejections across all reasons
    pub fn rejected_total(&self) -> usize {
        RejectReason::ALL
            .iter()
            .map(|reason| self.rejection_count(*reason))
            .sum()
    }

    /// Check the accounting invariant: every line is attributed exactly once
    pub fn is_consistent(&self) -> bool {
        self.total_lines == self.skipped + self.rejected_total() + self.valid
    }

    /// Share of data lines that survived validation, as a percentage
    pub fn valid_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.valid as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// One-line render for logging
    pub fn summary(&self) -> String {
        format!(
            "Validation summary: {} lines -> {} valid ({:.1}%) | skipped: {} | rejected: {}",
            self.total_lines,
            self.valid,
            self.valid_rate(),
            self.skipped,
            self.rejected_total()
        )
    }
}

/// Result of one validation pass
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Accepted transactions in ledger order
    pub transactions: Vec<Transaction>,
    /// Validation counters for the pass
    pub summary: ValidationSummary,
}

impl ProcessingResult {
    /// Create a new processing result
    pub fn new(transactions: Vec<Transaction>, summary: ValidationSummary) -> Self {
        Self {
            transactions,
            summary,
        }
    }

    /// Number of accepted transactions
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Check the summary invariant against the accepted set
    pub fn is_consistent(&self) -> bool {
        self.summary.is_consistent() && self.summary.valid == self.transactions.len()
    }
}
