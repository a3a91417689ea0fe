//! Line splitting and candidate construction
//!
//! `split_line` enforces the structural contract (exactly eight fields);
//! `parse_candidate` normalizes the raw fields into a typed candidate
//! record, defaulting enrichment attributes.

use tracing::debug;

use super::field_parsers::{clean_product_name, parse_quantity, parse_unit_price};
use crate::app::models::{Enrichment, RawRecord, RejectReason, Transaction};
use crate::constants::{EXPECTED_FIELD_COUNT, FIELD_DELIMITER};

/// Split one ledger line into its eight positional fields.
///
/// Returns `None` when the field count differs from eight; such a line is a
/// structural skip and never becomes a candidate. Fields are trimmed of
/// surrounding whitespace.
pub fn split_line(line: &str) -> Option<RawRecord> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if parts.len() != EXPECTED_FIELD_COUNT {
        debug!(
            "Skipping line with {} fields (expected {}): '{}'",
            parts.len(),
            EXPECTED_FIELD_COUNT,
            line
        );
        return None;
    }

    Some(RawRecord {
        transaction_id: parts[0].trim().to_string(),
        date: parts[1].trim().to_string(),
        product_id: parts[2].trim().to_string(),
        product_name: parts[3].trim().to_string(),
        quantity: parts[4].trim().to_string(),
        unit_price: parts[5].trim().to_string(),
        customer_id: parts[6].trim().to_string(),
        region: parts[7].trim().to_string(),
    })
}

/// Normalize a raw record into a typed candidate transaction.
///
/// Numeric fields are stripped of grouping separators and converted; a
/// conversion failure yields [`RejectReason::MalformedNumeric`]. The product
/// name has embedded separators removed unconditionally. ID fields, date and
/// region pass through as trimmed by [`split_line`].
pub fn parse_candidate(raw: RawRecord) -> Result<Transaction, RejectReason> {
    let quantity = parse_quantity(&raw.quantity).ok_or(RejectReason::MalformedNumeric)?;
    let unit_price = parse_unit_price(&raw.unit_price).ok_or(RejectReason::MalformedNumeric)?;

    Ok(Transaction {
        transaction_id: raw.transaction_id,
        date: raw.date,
        product_id: raw.product_id,
        product_name: clean_product_name(&raw.product_name),
        quantity,
        unit_price,
        customer_id: raw.customer_id,
        region: raw.region,
        enrichment: Enrichment::default(),
    })
}
