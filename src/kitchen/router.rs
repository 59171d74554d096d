//! Order intake: ack-id assignment and routing to the inbound queue of a floor.

use crate::kitchen::{FloorQueues, OrderError};
use crate::model::{AckId, Address, Dish, FoodOrder};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Assigns ack ids and enqueues new orders by floor.
///
/// The counter belongs to the router instance, so independent shops (for example in
/// parallel tests) each start numbering at 1.
pub struct OrderRouter {
    next_ack_id: AtomicU64,
    orders_in: Arc<FloorQueues>,
}

impl OrderRouter {
    pub fn new(orders_in: Arc<FloorQueues>) -> Self {
        Self {
            next_ack_id: AtomicU64::new(1),
            orders_in,
        }
    }

    /// Validates, numbers and enqueues an order.
    ///
    /// # Errors
    /// Returns [`OrderError::InvalidOrder`] when `dishes` is empty.
    #[instrument(skip(self, dishes), fields(items = dishes.len()))]
    pub async fn route(
        &self,
        address: Address,
        dishes: Vec<Dish>,
    ) -> Result<Arc<FoodOrder>, OrderError> {
        debug!(?dishes, "route called");
        if dishes.is_empty() {
            return Err(OrderError::InvalidOrder(format!(
                "order for {} contains no dishes",
                address
            )));
        }

        let order = self
            .orders_in
            .push_with(address.floor_id, || {
                let ack_id = AckId(self.next_ack_id.fetch_add(1, Ordering::SeqCst));
                FoodOrder::new(ack_id, address, dishes)
            })
            .await;

        info!(ack_id = %order.ack_id, floor = address.floor_id, "Order placed");
        Ok(order)
    }

    /// Number of orders accepted so far.
    pub fn orders_received(&self) -> u64 {
        self.next_ack_id.load(Ordering::SeqCst) - 1
    }
}
