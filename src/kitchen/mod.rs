//! # Kitchen & Delivery Pipeline
//!
//! The order-fulfillment core of the shop:
//!
//! ```text
//! place_order -> OrderRouter -> orders_in[floor] -> Chef -> orders_ready_out[floor] -> DeliveryPerson -> receipt
//! ```
//!
//! ## Structure
//!
//! - [`queues`] - [`FloorQueues`], the shared per-floor FIFO map with round-robin dequeue
//! - [`router`] - [`OrderRouter`], ack-id assignment and inbound routing
//! - [`chef`] - [`Chef`] worker loop
//! - [`delivery`] - [`DeliveryPerson`] worker loop
//! - [`shutdown`] - [`ShutdownToken`] that wakes idle workers for a clean exit
//! - [`error`] - [`OrderError`]

pub mod chef;
pub mod delivery;
pub mod error;
pub mod queues;
pub mod router;
pub mod shutdown;

pub use chef::*;
pub use delivery::*;
pub use error::*;
pub use queues::*;
pub use router::*;
pub use shutdown::*;
