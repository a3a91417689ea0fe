//! Ordered admissibility rules for candidate records
//!
//! Rule order is fixed and determines rejection attribution: a candidate
//! failing several rules is counted under the first one it fails.

use crate::app::models::{RejectReason, Transaction};
use crate::constants::id_prefix;

/// Validate a normalized candidate against the admissibility rules.
///
/// Rules, in attribution order:
/// 1. transaction id starts with "T"
/// 2. product id starts with "P"
/// 3. customer id starts with "C"
/// 4. quantity is positive
/// 5. unit price is positive
///
/// Every input yields a definite accept/reject outcome.
pub fn validate(candidate: &Transaction) -> Result<(), RejectReason> {
    if !candidate.transaction_id.starts_with(id_prefix::TRANSACTION) {
        return Err(RejectReason::BadTransactionId);
    }
    if !candidate.product_id.starts_with(id_prefix::PRODUCT) {
        return Err(RejectReason::BadProductId);
    }
    if !candidate.customer_id.starts_with(id_prefix::CUSTOMER) {
        return Err(RejectReason::BadCustomerId);
    }
    if candidate.quantity <= 0 {
        return Err(RejectReason::NonPositiveQuantity);
    }
    if candidate.unit_price <= 0.0 {
        return Err(RejectReason::NonPositivePrice);
    }
    Ok(())
}
