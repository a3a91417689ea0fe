//! Transaction enrichment over the lookup chain
//!
//! Walks each valid transaction through the ordered strategies and attaches
//! the first match. Misses leave the default enrichment in place; the record
//! set is never shrunk or grown here.

use tracing::{debug, info};

use super::lookup::ProductLookup;
use crate::app::models::{Enrichment, Transaction};

/// Enrich transactions in place; returns how many matched any source.
pub fn enrich_transactions(
    transactions: &mut [Transaction],
    chain: &[Box<dyn ProductLookup>],
) -> usize {
    let mut matched = 0;

    for transaction in transactions.iter_mut() {
        if let Some(enrichment) = lookup_product(&transaction.product_id, chain) {
            transaction.enrichment = enrichment;
            matched += 1;
        }
    }

    info!(
        "Enrichment complete: {}/{} transactions matched",
        matched,
        transactions.len()
    );
    matched
}

/// Try each strategy in order and return the first hit.
pub fn lookup_product(
    product_id: &str,
    chain: &[Box<dyn ProductLookup>],
) -> Option<Enrichment> {
    for strategy in chain {
        if let Some(enrichment) = strategy.lookup(product_id) {
            debug!("Product '{}' matched by {}", product_id, strategy.name());
            return Some(enrichment);
        }
    }
    None
}
