//! Record processing pipeline for sales candidates
//!
//! This module takes raw ledger lines and produces the final valid record
//! set plus a validation summary. It is organized into logical components:
//! - [`processor`] - RecordProcessor struct and pipeline orchestration
//! - [`validator`] - ordered admissibility rules
//! - [`filter`] - optional user-supplied constraints on valid records
//! - [`stats`] - validation counters and result structures
//!
//! # Processing Pipeline
//!
//! Each line passes through three stages:
//!
//! 1. **Splitting**: wrong field counts are structural skips
//! 2. **Normalization**: numeric fields are cleaned and converted; failures
//!    are counted as malformed-numeric rejections
//! 3. **Validation**: five admissibility rules in fixed order; the first
//!    failing rule attributes the rejection
//!
//! Every input line yields a definite outcome. Nothing in this module
//! performs I/O or raises an unrecoverable error.

pub mod filter;
pub mod processor;
pub mod stats;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use filter::{FilterOptions, apply_filters};
pub use processor::RecordProcessor;
pub use stats::{ProcessingResult, ValidationSummary};
pub use validator::validate;
