//! Parsing of pipe-delimited sales lines
//!
//! This module turns one raw ledger line into a typed candidate record.
//! It is organized into two components:
//! - [`record_parser`] - line splitting and candidate construction
//! - [`field_parsers`] - per-field cleaning and numeric normalization
//!
//! A line with the wrong field count never becomes a candidate (structural
//! skip); a candidate whose numeric fields do not parse after separator
//! stripping is rejected with a malformed-numeric reason. Both outcomes are
//! counted by the record processor, never raised as errors.

pub mod field_parsers;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use record_parser::{parse_candidate, split_line};
