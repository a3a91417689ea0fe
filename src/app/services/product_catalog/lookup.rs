//! Ordered lookup strategies for product metadata
//!
//! Each source implements [`ProductLookup`]; the enricher tries a chain of
//! strategies in sequence and takes the first hit. New sources slot into
//! the chain without touching the enrichment loop.

use std::collections::HashMap;

use super::client::CatalogProduct;
use crate::app::models::Enrichment;
use crate::constants::{LOCAL_BRAND, LOCAL_CATEGORIES, LOCAL_RATING};

/// A source of product metadata keyed by product id
pub trait ProductLookup {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Return enrichment attributes when this source knows the product
    fn lookup(&self, product_id: &str) -> Option<Enrichment>;
}

/// Static product-id to category table, checked before any remote source
#[derive(Debug, Default)]
pub struct LocalLookup;

impl LocalLookup {
    /// Create the local table lookup
    pub fn new() -> Self {
        Self
    }
}

impl ProductLookup for LocalLookup {
    fn name(&self) -> &'static str {
        "local table"
    }

    fn lookup(&self, product_id: &str) -> Option<Enrichment> {
        LOCAL_CATEGORIES
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, category)| Enrichment {
                category: Some((*category).to_string()),
                brand: Some(LOCAL_BRAND.to_string()),
                rating: Some(LOCAL_RATING),
                matched: true,
            })
    }
}

/// Derive the numeric catalog key from a product id.
///
/// The key is the decimal value of the digits following the leading
/// alphabetic prefix: "P042" -> 42, "P101" -> 101. A product id with no
/// digits, a non-numeric suffix or an overflowing value has no key.
pub fn catalog_key(product_id: &str) -> Option<u32> {
    let suffix = product_id.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Remote catalog entries indexed by their numeric id
#[derive(Debug, Default)]
pub struct CatalogLookup {
    by_id: HashMap<u32, CatalogProduct>,
}

impl CatalogLookup {
    /// Index fetched catalog entries for O(1) lookups
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        let by_id = products
            .into_iter()
            .map(|product| (product.id, product))
            .collect();
        Self { by_id }
    }

    /// Number of indexed entries
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True when no entries were indexed
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl ProductLookup for CatalogLookup {
    fn name(&self) -> &'static str {
        "remote catalog"
    }

    fn lookup(&self, product_id: &str) -> Option<Enrichment> {
        let key = catalog_key(product_id)?;
        self.by_id.get(&key).map(|product| Enrichment {
            category: Some(product.category.clone()),
            brand: product.brand.clone(),
            rating: Some(product.rating),
            matched: true,
        })
    }
}

/// Build the standard lookup chain: local table first, then the catalog
/// when one was fetched.
pub fn build_chain(catalog: Option<Vec<CatalogProduct>>) -> Vec<Box<dyn ProductLookup>> {
    let mut chain: Vec<Box<dyn ProductLookup>> = vec![Box::new(LocalLookup::new())];
    if let Some(products) = catalog {
        chain.push(Box::new(CatalogLookup::new(products)));
    }
    chain
}
