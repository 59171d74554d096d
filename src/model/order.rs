//! A customer order travelling through the kitchen.
//!
//! # Lifecycle
//! Orders are created by the [`OrderRouter`](crate::kitchen::OrderRouter) and shared as
//! `Arc<FoodOrder>` between the caller, the queues and whichever worker currently holds
//! them. The status follows a fixed state machine:
//!
//! ```text
//! Placed -> InPrep -> Ready -> Delivered
//!    \         \
//!     +---------+--> Cancelled
//! ```
//!
//! Every change goes through [`FoodOrder::advance`], which rejects transitions the state
//! machine does not allow. The status is held in a `watch` channel so callers can await
//! a target state with [`FoodOrder::wait_for`].

use crate::kitchen::OrderError;
use crate::model::{Address, Dish, FloorId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tokio::sync::watch;

/// Acknowledgement id handed back to the customer at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AckId(pub u64);

impl Display for AckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    InPrep,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the state machine allows moving from `self` to `next`.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Placed, InPrep)
                | (InPrep, Ready)
                | (Ready, Delivered)
                | (Placed, Cancelled)
                | (InPrep, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Placed => "placed",
            OrderStatus::InPrep => "in-prep",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug)]
pub struct FoodOrder {
    pub ack_id: AckId,
    pub address: Address,
    pub items: Vec<Dish>,
    status: watch::Sender<OrderStatus>,
}

impl FoodOrder {
    /// Creates a new order in the `Placed` state.
    ///
    /// # Arguments
    /// * `ack_id` - Identifier assigned by the router
    /// * `address` - Delivery destination, its floor is the routing key
    /// * `items` - Ordered dishes, in the order the customer listed them
    pub fn new(ack_id: AckId, address: Address, items: Vec<Dish>) -> Self {
        let (status, _) = watch::channel(OrderStatus::Placed);
        Self {
            ack_id,
            address,
            items,
            status,
        }
    }

    pub fn floor(&self) -> FloorId {
        self.address.floor_id
    }

    pub fn status(&self) -> OrderStatus {
        *self.status.borrow()
    }

    /// Moves the order to `next`, returning the status it left.
    ///
    /// The check and the write happen atomically, so two workers racing on the same
    /// order cannot both succeed.
    pub fn advance(&self, next: OrderStatus) -> Result<OrderStatus, OrderError> {
        let mut from = next;
        let moved = self.status.send_if_modified(|current| {
            from = *current;
            if current.can_advance_to(next) {
                *current = next;
                true
            } else {
                false
            }
        });
        if moved {
            Ok(from)
        } else {
            Err(OrderError::InvalidTransition {
                ack_id: self.ack_id,
                from,
                to: next,
            })
        }
    }

    /// Returns a receiver that observes every status change.
    pub fn subscribe(&self) -> watch::Receiver<OrderStatus> {
        self.status.subscribe()
    }

    /// Waits until the order reaches `target` or a terminal state, whichever comes first.
    pub async fn wait_for(&self, target: OrderStatus) -> OrderStatus {
        let mut receiver = self.subscribe();
        let reached = match receiver
            .wait_for(|status| *status == target || status.is_terminal())
            .await
        {
            Ok(status) => *status,
            Err(_) => self.status(),
        };
        // The watch guard must be released before `receiver` goes out of scope.
        reached
    }
}
