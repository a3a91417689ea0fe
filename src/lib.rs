//! Sales Processor Library
//!
//! A Rust library for processing pipe-delimited sales ledgers into validated
//! record sets, enriched data files and aggregate reports.
//!
//! This library provides tools for:
//! - Parsing pipe-delimited sales lines with strict field-count handling
//! - Normalizing text and numeric fields before validation
//! - Validating candidate records against ordered admissibility rules
//! - Enriching valid transactions from a local category table and a remote
//!   product catalog with graceful degradation
//! - Building region, daily, customer and product rollups in a single pass
//! - Rendering basic and full text reports plus an enriched data file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod product_catalog;
        pub mod record_processor;
        pub mod report_writer;
        pub mod sales_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Enrichment, RejectReason, Transaction};
pub use config::Config;

/// Result type alias for the sales processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pipeline infrastructure failures.
///
/// Per-record problems (structural skips, validation rejections, enrichment
/// misses) are never errors; they are absorbed into counters and summaries.
/// Only whole-pipeline failures surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file missing
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input file undecodable in all attempted encodings
    #[error("Encoding error: unable to decode '{path}' as any of {attempted}")]
    Encoding { path: String, attempted: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Remote catalog fetch failed (recoverable by the enrichment stage)
    #[error("Catalog fetch error: {message}")]
    CatalogFetch {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Report or data file writing error
    #[error("Report writing error: {message}")]
    ReportWriting {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an encoding error naming the attempted encodings
    pub fn encoding(path: impl Into<String>, attempted: &[&str]) -> Self {
        Self::Encoding {
            path: path.into(),
            attempted: attempted.join(", "),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a catalog fetch error with optional transport context
    pub fn catalog_fetch(message: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self::CatalogFetch {
            message: message.into(),
            source,
        }
    }

    /// Create a report writing error
    pub fn report_writing(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ReportWriting {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::CatalogFetch {
            message: "catalog request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::ReportWriting {
            message: "enriched data writing failed".to_string(),
            source: Box::new(error),
        }
    }
}
