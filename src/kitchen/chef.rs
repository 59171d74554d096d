//! # Chef Worker
//!
//! A chef is a long-lived task that drains the inbound queues of every floor and hands
//! prepared orders to the outbound queue of the same floor.
//!
//! ## Work Loop
//!
//! 1. Take the next inbound order (round-robin across floors, see
//!    [`FloorQueues`](crate::kitchen::FloorQueues)). Suspend while there is none.
//! 2. `Placed -> InPrep`. An order cancelled while it was queued is skipped here.
//! 3. Prepare it for the configured prep time.
//! 4. `InPrep -> Ready`, then push to `orders_ready_out[floor]`. An order cancelled
//!    during preparation leaves the pipeline instead.
//!
//! A chef holds at most one order at a time and exits when the shutdown token fires.

use crate::kitchen::{FloorQueues, ShutdownToken};
use crate::model::OrderStatus;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Dependencies injected into a chef when it starts.
#[derive(Clone)]
pub struct ChefContext {
    pub orders_in: Arc<FloorQueues>,
    pub orders_ready_out: Arc<FloorQueues>,
    pub prep_time: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chef {
    pub name: String,
}

impl Chef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Runs the work loop until shutdown. Returns the number of orders prepared.
    pub async fn run(self, ctx: ChefContext, mut shutdown: ShutdownToken) -> usize {
        let chef = self.name.as_str();
        info!(chef, "Chef started");
        let mut prepared = 0;

        while let Some(order) = ctx.orders_in.pop(&mut shutdown).await {
            if let Err(e) = order.advance(OrderStatus::InPrep) {
                debug!(chef, ack_id = %order.ack_id, error = %e, "Skipping order");
                continue;
            }
            debug!(chef, ack_id = %order.ack_id, floor = order.floor(), "Preparing");

            if !ctx.prep_time.is_zero() {
                tokio::time::sleep(ctx.prep_time).await;
            }

            match order.advance(OrderStatus::Ready) {
                Ok(_) => {
                    ctx.orders_ready_out.push(order.clone()).await;
                    prepared += 1;
                    info!(chef, ack_id = %order.ack_id, floor = order.floor(), "Order ready");
                }
                Err(e) => warn!(chef, ack_id = %order.ack_id, error = %e, "Order left the kitchen"),
            }
        }

        info!(chef, prepared, "Shutdown");
        prepared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::shutdown_channel;
    use crate::model::{AckId, Address, Dish, FoodOrder};

    fn context() -> ChefContext {
        ChefContext {
            orders_in: Arc::new(FloorQueues::new("inbound")),
            orders_ready_out: Arc::new(FloorQueues::new("outbound")),
            prep_time: Duration::ZERO,
        }
    }

    fn order(ack: u64, floor: u32) -> Arc<FoodOrder> {
        Arc::new(FoodOrder::new(
            AckId(ack),
            Address::new(1, floor, 1),
            vec![Dish::new("curry", false, 700, 11.0)],
        ))
    }

    #[tokio::test]
    async fn test_chef_prepares_in_floor_order() {
        let ctx = context();
        let (sender, token) = shutdown_channel();

        let first = order(1, 3);
        let second = order(2, 3);
        ctx.orders_in.push(first.clone()).await;
        ctx.orders_in.push(second.clone()).await;

        let handle = tokio::spawn(Chef::new("Julia Child").run(ctx.clone(), token));

        assert_eq!(second.wait_for(OrderStatus::Ready).await, OrderStatus::Ready);
        assert_eq!(first.status(), OrderStatus::Ready);

        // The chef finishes the order in hand before it stops.
        sender.shutdown();
        assert_eq!(handle.await.unwrap(), 2);

        let out_first = ctx.orders_ready_out.try_pop().await.unwrap();
        let out_second = ctx.orders_ready_out.try_pop().await.unwrap();
        assert_eq!(out_first.ack_id, AckId(1));
        assert_eq!(out_second.ack_id, AckId(2));
    }

    #[tokio::test]
    async fn test_chef_skips_cancelled_order() {
        let ctx = context();
        let (sender, token) = shutdown_channel();

        let cancelled = order(1, 2);
        cancelled.advance(OrderStatus::Cancelled).unwrap();
        let kept = order(2, 2);
        ctx.orders_in.push(cancelled.clone()).await;
        ctx.orders_in.push(kept.clone()).await;

        let handle = tokio::spawn(Chef::new("Jiro Ono").run(ctx.clone(), token));
        kept.wait_for(OrderStatus::Ready).await;
        sender.shutdown();
        assert_eq!(handle.await.unwrap(), 1);

        assert_eq!(ctx.orders_ready_out.len().await, 1);
        assert_eq!(cancelled.status(), OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_chef_drops_order_cancelled_during_prep() {
        let ctx = ChefContext {
            prep_time: Duration::from_millis(200),
            ..context()
        };
        let (sender, token) = shutdown_channel();

        let order = order(1, 5);
        ctx.orders_in.push(order.clone()).await;
        let handle = tokio::spawn(Chef::new("Gordon Ramsey").run(ctx.clone(), token));

        // 1. Wait until the chef has started preparing
        assert_eq!(order.wait_for(OrderStatus::InPrep).await, OrderStatus::InPrep);

        // 2. Cancel mid-preparation
        assert_eq!(order.advance(OrderStatus::Cancelled).unwrap(), OrderStatus::InPrep);

        // 3. The chef finishes its prep time, then lets the order go
        sender.shutdown();
        assert_eq!(handle.await.unwrap(), 0);

        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert!(ctx.orders_ready_out.is_empty().await);
    }

    #[tokio::test]
    async fn test_idle_chef_exits_on_shutdown() {
        let (sender, token) = shutdown_channel();
        let handle = tokio::spawn(Chef::new("Alice Waters").run(context(), token));

        tokio::time::sleep(Duration::from_millis(20)).await;
        sender.shutdown();

        assert_eq!(handle.await.unwrap(), 0);
    }
}
