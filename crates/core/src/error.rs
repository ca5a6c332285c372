use crate::round::RoundStatus;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The round exists but its lifecycle state forbids the operation.
    #[error("Round {id} is {status} and not accepting orders")]
    InvalidState { id: DbId, status: RoundStatus },

    #[error("Round {id} is full ({max_orders} orders)")]
    CapacityReached { id: DbId, max_orders: i32 },
}
