//! Remote product catalog client
//!
//! Fetches up to 100 product entries from the catalog endpoint. A fetch
//! failure surfaces as [`crate::Error::CatalogFetch`] to the caller, which
//! degrades to local-table enrichment rather than aborting the run.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::{Error, Result};

/// One product entry from the remote catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogProduct {
    /// Numeric catalog id
    pub id: u32,
    /// Display title
    pub title: String,
    /// Category name
    pub category: String,
    /// Brand, absent for some entries
    #[serde(default)]
    pub brand: Option<String>,
    /// Average rating
    pub rating: f64,
}

/// Envelope returned by the catalog endpoint
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<CatalogProduct>,
}

/// Fetch the product catalog with a bounded timeout.
///
/// The timeout covers the whole request; on expiry or any transport/status
/// failure the error is returned for the caller to recover from.
pub async fn fetch_catalog(url: &str, timeout: Duration) -> Result<Vec<CatalogProduct>> {
    debug!("Fetching product catalog from '{}'", url);

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::catalog_fetch("failed to build HTTP client", Some(e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::catalog_fetch(format!("request to '{}' failed", url), Some(e)))?
        .error_for_status()
        .map_err(|e| Error::catalog_fetch("catalog endpoint returned an error status", Some(e)))?;

    let payload: CatalogResponse = response
        .json()
        .await
        .map_err(|e| Error::catalog_fetch("malformed catalog payload", Some(e)))?;

    info!("Fetched {} products from catalog", payload.products.len());
    Ok(payload.products)
}
