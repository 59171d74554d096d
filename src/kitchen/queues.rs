//! # Floor-keyed Order Queues
//!
//! [`FloorQueues`] is the shared map `FloorId -> FIFO of orders` used twice by the shop:
//! once for orders waiting for a chef (inbound) and once for prepared orders waiting
//! for a delivery person (outbound).
//!
//! ## Synchronization
//!
//! The whole map sits behind a single `tokio::sync::Mutex`. Every operation is a short
//! read-modify-write (pop head, push tail, lazy key creation), so one coarse lock is
//! cheap and keeps the fairness cursor consistent with the queues it indexes.
//! A `Notify` is signalled once per push; waiting workers always re-check the queues
//! before sleeping again, so a wakeup is never lost.
//!
//! ## Fairness Policy
//!
//! Floors are kept in a ring in the order they were first seen, together with a cursor
//! shared by every consumer of the map. A dequeue scans the ring from the cursor, takes
//! the head of the first non-empty floor and moves the cursor one past that floor.
//!
//! * Per-floor FIFO order is preserved.
//! * A non-empty floor is served within `ring.len()` consecutive dequeues, no matter how
//!   busy the other floors are.
//! * The service order never depends on hash iteration order.

use crate::kitchen::ShutdownToken;
use crate::model::{AckId, FloorId, FoodOrder};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use tracing::debug;

#[derive(Default)]
struct QueueState {
    queues: HashMap<FloorId, VecDeque<Arc<FoodOrder>>>,
    ring: Vec<FloorId>,
    cursor: usize,
}

impl QueueState {
    /// Returns the queue for `floor`, creating it (and its ring slot) on first use.
    fn queue_mut(&mut self, floor: FloorId) -> &mut VecDeque<Arc<FoodOrder>> {
        if !self.queues.contains_key(&floor) {
            self.ring.push(floor);
        }
        self.queues.entry(floor).or_default()
    }

    fn pop_round_robin(&mut self) -> Option<Arc<FoodOrder>> {
        let floors = self.ring.len();
        for step in 0..floors {
            let slot = (self.cursor + step) % floors;
            let floor = self.ring[slot];
            if let Some(order) = self.queues.get_mut(&floor).and_then(VecDeque::pop_front) {
                self.cursor = (slot + 1) % floors;
                return Some(order);
            }
        }
        None
    }
}

/// A set of per-floor FIFO queues shared by many producers and consumers.
pub struct FloorQueues {
    label: &'static str,
    state: Mutex<QueueState>,
    available: Notify,
}

impl FloorQueues {
    /// Creates an empty queue map. `label` only appears in log lines.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: Mutex::new(QueueState::default()),
            available: Notify::new(),
        }
    }

    /// Appends an order to the tail of its floor's queue.
    pub async fn push(&self, order: Arc<FoodOrder>) {
        let floor = order.floor();
        let depth = {
            let mut state = self.state.lock().await;
            let queue = state.queue_mut(floor);
            queue.push_back(order);
            queue.len()
        };
        debug!(queue = self.label, floor, depth, "Enqueued");
        self.available.notify_one();
    }

    /// Builds an order while holding the lock and appends it to `floor`.
    ///
    /// Anything `make` assigns (such as an ack id) is therefore ordered exactly like the
    /// queue itself.
    pub async fn push_with<F>(&self, floor: FloorId, make: F) -> Arc<FoodOrder>
    where
        F: FnOnce() -> FoodOrder,
    {
        let order = {
            let mut state = self.state.lock().await;
            let order = Arc::new(make());
            state.queue_mut(floor).push_back(order.clone());
            order
        };
        debug!(queue = self.label, floor, ack_id = %order.ack_id, "Enqueued");
        self.available.notify_one();
        order
    }

    /// Takes the next order under the round-robin policy without waiting.
    pub async fn try_pop(&self) -> Option<Arc<FoodOrder>> {
        self.state.lock().await.pop_round_robin()
    }

    /// Takes the next order, suspending until one is available.
    ///
    /// Returns `None` once shutdown has been signalled.
    pub async fn pop(&self, shutdown: &mut ShutdownToken) -> Option<Arc<FoodOrder>> {
        loop {
            if shutdown.is_shutdown() {
                return None;
            }
            if let Some(order) = self.try_pop().await {
                return Some(order);
            }
            tokio::select! {
                _ = self.available.notified() => {}
                _ = shutdown.wait() => return None,
            }
        }
    }

    /// Removes a specific order from its floor's queue, if it is still there.
    pub async fn remove(&self, floor: FloorId, ack_id: AckId) -> Option<Arc<FoodOrder>> {
        let mut state = self.state.lock().await;
        let queue = state.queues.get_mut(&floor)?;
        let position = queue.iter().position(|order| order.ack_id == ack_id)?;
        queue.remove(position)
    }

    /// Total number of queued orders across all floors.
    pub async fn len(&self) -> usize {
        self.state.lock().await.queues.values().map(VecDeque::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn floor_len(&self, floor: FloorId) -> usize {
        self.state
            .lock()
            .await
            .queues
            .get(&floor)
            .map_or(0, VecDeque::len)
    }

    /// Floors seen so far, in ring order.
    pub async fn floors(&self) -> Vec<FloorId> {
        self.state.lock().await.ring.clone()
    }
}
