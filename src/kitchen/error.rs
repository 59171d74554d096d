//! Error types for order placement and the order state machine.

use crate::model::{AckId, OrderStatus};
use thiserror::Error;

/// Errors that can occur while placing or progressing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order was rejected at placement (e.g. no dishes).
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// The state machine does not allow the requested status change.
    #[error("Invalid transition for {ack_id}: {from} -> {to}")]
    InvalidTransition {
        ack_id: AckId,
        from: OrderStatus,
        to: OrderStatus,
    },
}
