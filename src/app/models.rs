//! Core data models for the sales pipeline.
//!
//! Defines the raw positional record produced by line splitting, the
//! validated [`Transaction`] entity, its optional [`Enrichment`] attributes
//! and the [`RejectReason`] taxonomy used by the validation summary.

use std::fmt;

/// One raw data line split into its eight positional fields.
///
/// Ephemeral: consumed by the normalizer and discarded. Fields are trimmed
/// of surrounding whitespace but otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub transaction_id: String,
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub unit_price: String,
    pub customer_id: String,
    pub region: String,
}

/// Metadata attached to a transaction after validation.
///
/// Additive only: enrichment never rejects a record. `matched` is true
/// exactly when either the local table or the remote catalog produced a
/// non-default match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    /// Product category from the matching source
    pub category: Option<String>,
    /// Brand from the matching source
    pub brand: Option<String>,
    /// Rating from the matching source
    pub rating: Option<f64>,
    /// Whether any lookup source matched this product
    pub matched: bool,
}

/// A validated, admissible sales record.
///
/// Created by the parser/normalizer, accepted by the validator, and from
/// then on mutated only by the enricher. Consumers (filter, analytics,
/// report writers) treat it as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Must start with "T"
    pub transaction_id: String,
    /// Transaction date as recorded in the ledger
    pub date: String,
    /// Must start with "P"
    pub product_id: String,
    /// Free of embedded grouping separators after normalization
    pub product_name: String,
    /// Must be positive
    pub quantity: i64,
    /// Must be positive
    pub unit_price: f64,
    /// Must start with "C"
    pub customer_id: String,
    /// Free-form region name
    pub region: String,
    /// Optional post-validation metadata
    pub enrichment: Enrichment,
}

impl Transaction {
    /// Derived transaction value: quantity times unit price
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Reason a candidate record was rejected.
///
/// Each rejected candidate is attributed to exactly one reason: numeric
/// normalization failures are attributed before the admissibility rules run
/// (a candidate without parsed numerics is never constructed), and the five
/// rules are evaluated in declaration order with the first failure winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Transaction ID does not start with "T"
    BadTransactionId,
    /// Product ID does not start with "P"
    BadProductId,
    /// Customer ID does not start with "C"
    BadCustomerId,
    /// Quantity is zero or negative
    NonPositiveQuantity,
    /// Unit price is zero or negative
    NonPositivePrice,
    /// Quantity or unit price did not parse after separator stripping
    MalformedNumeric,
}

impl RejectReason {
    /// All reasons in attribution order
    pub const ALL: [RejectReason; 6] = [
        RejectReason::BadTransactionId,
        RejectReason::BadProductId,
        RejectReason::BadCustomerId,
        RejectReason::NonPositiveQuantity,
        RejectReason::NonPositivePrice,
        RejectReason::MalformedNumeric,
    ];

    /// Human-readable label for summaries and reports
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::BadTransactionId => "bad transaction id",
            RejectReason::BadProductId => "bad product id",
            RejectReason::BadCustomerId => "bad customer id",
            RejectReason::NonPositiveQuantity => "non-positive quantity",
            RejectReason::NonPositivePrice => "non-positive price",
            RejectReason::MalformedNumeric => "malformed numeric field",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
