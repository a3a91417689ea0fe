//! Product metadata sources and transaction enrichment
//!
//! Enrichment attaches category, brand and rating metadata to valid
//! transactions. Two sources are consulted as an ordered chain of lookup
//! strategies:
//! 1. [`lookup::LocalLookup`] - the static product-id to category table
//! 2. [`lookup::CatalogLookup`] - the remotely fetched product catalog
//!
//! The first strategy that matches wins; a miss everywhere leaves the
//! transaction with default enrichment and a false match flag. Enrichment
//! is strictly additive: no record is ever dropped here, and a failed
//! catalog fetch degrades the chain to the local table alone.

pub mod client;
pub mod enrichment;
pub mod lookup;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use client::{CatalogProduct, fetch_catalog};
pub use enrichment::enrich_transactions;
pub use lookup::{CatalogLookup, LocalLookup, ProductLookup, catalog_key};
