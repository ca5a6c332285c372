//! Order admission rules.
//!
//! [`check_admission`] is the decision the order repository evaluates while
//! it holds the round's row lock, so status, count and insert are observed
//! as one unit.

use crate::error::CoreError;
use crate::round::RoundStatus;
use crate::types::DbId;

/// Quantity used when an order omits `qty`.
pub const DEFAULT_QTY: i32 = 1;

/// Resolve the requested quantity. Must be positive when given.
pub fn resolve_qty(requested: Option<i32>) -> Result<i32, CoreError> {
    match requested {
        None => Ok(DEFAULT_QTY),
        Some(n) if n > 0 => Ok(n),
        Some(n) => Err(CoreError::Validation(format!(
            "qty must be a positive integer, got {n}"
        ))),
    }
}

/// Decide whether one more order may join round `id`.
///
/// Status is checked before capacity: a locked round that is also full
/// reports [`CoreError::InvalidState`].
pub fn check_admission(
    id: DbId,
    status: RoundStatus,
    current_count: i64,
    max_orders: i32,
) -> Result<(), CoreError> {
    if !status.accepts_orders() {
        return Err(CoreError::InvalidState { id, status });
    }
    if current_count >= i64::from(max_orders) {
        return Err(CoreError::CapacityReached { id, max_orders });
    }
    Ok(())
}
