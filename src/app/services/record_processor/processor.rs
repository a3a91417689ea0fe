//! Main record processor implementation and pipeline orchestration
//!
//! The [`RecordProcessor`] drives each ledger line through splitting,
//! normalization and validation, accumulating the valid record set and the
//! validation counters in a single pass.

use tracing::{debug, info};

use super::stats::{ProcessingResult, ValidationSummary};
use super::validator::validate;
use crate::app::services::sales_parser::{parse_candidate, split_line};

/// Record processor for raw ledger lines
///
/// # Example
///
/// ```rust
/// use sales_processor::app::services::record_processor::RecordProcessor;
///
/// let lines = vec!["T001|2024-01-01|P101|Laptop|2|999.99|C001|North".to_string()];
/// let result = RecordProcessor::new().process_lines(&lines);
///
/// assert_eq!(result.transaction_count(), 1);
/// assert!(result.is_consistent());
/// ```
#[derive(Debug, Default)]
pub struct RecordProcessor;

impl RecordProcessor {
    /// Create a new record processor
    pub fn new() -> Self {
        Self
    }

    /// Process raw ledger lines into a valid record set plus summary.
    ///
    /// Every line is attributed to exactly one outcome: structural skip,
    /// one rejection reason, or valid. The returned summary satisfies
    /// `total = skipped + rejected + valid`.
    pub fn process_lines(&self, lines: &[String]) -> ProcessingResult {
        let mut summary = ValidationSummary::new();
        let mut transactions = Vec::with_capacity(lines.len());

        for line in lines {
            summary.record_line();

            let Some(raw) = split_line(line) else {
                summary.record_skip();
                continue;
            };

            let candidate = match parse_candidate(raw) {
                Ok(candidate) => candidate,
                Err(reason) => {
                    debug!("Rejected line ({}): '{}'", reason, line);
                    summary.record_rejection(reason);
                    continue;
                }
            };

            match validate(&candidate) {
                Ok(()) => {
                    summary.record_valid();
                    transactions.push(candidate);
                }
                Err(reason) => {
                    debug!(
                        "Rejected candidate {} ({})",
                        candidate.transaction_id, reason
                    );
                    summary.record_rejection(reason);
                }
            }
        }

        info!("{}", summary.summary());
        ProcessingResult::new(transactions, summary)
    }
}
