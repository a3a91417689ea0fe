//! Configuration management and validation.
//!
//! Provides configuration structures for the pipeline run: input/output
//! locations, optional record filters, catalog fetch settings and report
//! sizing parameters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::services::record_processor::filter::FilterOptions;
use crate::constants::{
    CATALOG_FETCH_TIMEOUT_SECS, CATALOG_URL, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR,
    DEFAULT_TOP_N, LOW_QUANTITY_THRESHOLD,
};
use crate::{Error, Result};

/// Remote catalog fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog endpoint URL
    pub url: String,

    /// Fetch timeout in seconds
    pub timeout_secs: u64,

    /// Whether to attempt the fetch at all (false = local table only)
    pub enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: CATALOG_URL.to_string(),
            timeout_secs: CATALOG_FETCH_TIMEOUT_SECS,
            enabled: true,
        }
    }
}

/// Global configuration for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the pipe-delimited sales ledger
    pub input_path: PathBuf,

    /// Directory receiving the three output artifacts
    pub output_dir: PathBuf,

    /// Optional constraints applied to the valid record set
    pub filters: FilterOptions,

    /// Remote catalog settings
    pub catalog: CatalogConfig,

    /// Length of the ranked customer/product lists
    pub top_n: usize,

    /// Quantity below which a product counts as a low performer
    pub low_quantity_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filters: FilterOptions::default(),
            catalog: CatalogConfig::default(),
            top_n: DEFAULT_TOP_N,
            low_quantity_threshold: LOW_QUANTITY_THRESHOLD,
        }
    }
}

impl Config {
    /// Set the input ledger path
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Set the record filters
    pub fn with_filters(mut self, filters: FilterOptions) -> Self {
        self.filters = filters;
        self
    }

    /// Set the ranked list length
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Disable the remote catalog fetch
    pub fn offline(mut self) -> Self {
        self.catalog.enabled = false;
        self
    }

    /// Check configuration invariants before running the pipeline
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::configuration("top_n must be at least 1"));
        }
        if self.catalog.enabled && self.catalog.timeout_secs == 0 {
            return Err(Error::configuration(
                "catalog timeout must be at least 1 second",
            ));
        }
        if let (Some(min), Some(max)) = (self.filters.min_amount, self.filters.max_amount) {
            if min > max {
                return Err(Error::configuration(format!(
                    "min amount {} exceeds max amount {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}
