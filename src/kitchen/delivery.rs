//! # Delivery Worker
//!
//! Delivery staff drain the outbound queues of every floor with the same round-robin
//! policy as the chefs. Each delivery marks the order `Delivered` and then publishes
//! its receipt. A failed publish is logged and leaves the order delivered.

use crate::kitchen::{FloorQueues, ShutdownToken};
use crate::model::{Address, OrderStatus};
use crate::receipt::{publish_receipt, MenuWriter};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Dependencies injected into a delivery person when they start.
#[derive(Clone)]
pub struct DeliveryContext {
    pub orders_ready_out: Arc<FloorQueues>,
    pub delivery_time: Duration,
    pub writer: Arc<dyn MenuWriter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPerson {
    pub first_name: String,
    pub last_name: String,
    /// Home base. Deliveries are not restricted to this floor.
    pub home: Address,
}

impl Display for DeliveryPerson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl DeliveryPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, home: Address) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            home,
        }
    }

    /// Runs the delivery loop until shutdown. Returns the number of orders delivered.
    pub async fn run(self, ctx: DeliveryContext, mut shutdown: ShutdownToken) -> usize {
        let courier = self.to_string();
        info!(%courier, home = %self.home, "Delivery person started");
        let mut delivered = 0;

        while let Some(order) = ctx.orders_ready_out.pop(&mut shutdown).await {
            debug!(%courier, ack_id = %order.ack_id, destination = %order.address, "Delivering");
            if !ctx.delivery_time.is_zero() {
                tokio::time::sleep(ctx.delivery_time).await;
            }

            if let Err(e) = order.advance(OrderStatus::Delivered) {
                warn!(%courier, ack_id = %order.ack_id, error = %e, "Delivery rejected");
                continue;
            }
            delivered += 1;
            info!(%courier, ack_id = %order.ack_id, floor = order.floor(), "Delivered");

            if let Err(e) = publish_receipt(ctx.writer.as_ref(), &order).await {
                warn!(%courier, ack_id = %order.ack_id, error = %e, "Receipt not published");
            }
        }

        info!(%courier, delivered, "Shutdown");
        delivered
    }
}
