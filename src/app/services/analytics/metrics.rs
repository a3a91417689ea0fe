//! Global revenue metrics

use crate::app::models::Transaction;

/// Totals across the entire final record set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalMetrics {
    /// Sum of all transaction amounts
    pub total_revenue: f64,
    /// Number of transactions
    pub transaction_count: usize,
    /// Mean amount per transaction; zero for an empty set
    pub average_order_value: f64,
}

/// Compute global totals; an empty set yields all-zero metrics rather than
/// a division error.
pub fn global_metrics(transactions: &[Transaction]) -> GlobalMetrics {
    let total_revenue: f64 = transactions.iter().map(Transaction::amount).sum();
    let transaction_count = transactions.len();
    let average_order_value = if transaction_count == 0 {
        0.0
    } else {
        total_revenue / transaction_count as f64
    };

    GlobalMetrics {
        total_revenue,
        transaction_count,
        average_order_value,
    }
}
