//! # Take-out Shop
//!
//! A take-out food shop built on Tokio tasks: a menu catalog owned by an actor, orders
//! routed by floor, a pool of chefs and a pool of delivery staff.
//!
//! ## Order Flow
//!
//! ```text
//! Shop::place_order
//!   -> OrderRouter        ack id + inbound queue of the destination floor
//!   -> Chef               Placed -> InPrep -> Ready, outbound queue of the same floor
//!   -> DeliveryPerson     Ready -> Delivered, receipt "{building}-{floor}-{unit}.json"
//! ```
//!
//! ## Architecture Notes
//!
//! ### 1. Shared Per-Floor Queues
//! Inbound and outbound orders live in [`FloorQueues`](kitchen::FloorQueues): one FIFO per
//! floor behind a single lock, drained round-robin by every worker of a pool. A floor
//! with queued work is served within one full turn of the ring, whatever the load on
//! other floors.
//!
//! ### 2. Observable Orders
//! A [`FoodOrder`](model::FoodOrder) carries its status in a `watch` channel. Workers
//! move it through checked transitions; callers simply `wait_for` the state they need.
//!
//! ### 3. The Menu Actor
//! The catalog has exactly one owner, the [`MenuActor`](menu::MenuActor) task. Everything
//! else talks to it through a cloneable [`MenuClient`](clients::MenuClient) and receives
//! owned snapshots.
//!
//! ### 4. Type-Safe Error Handling
//! Each concern defines its own error type ([`OrderError`](kitchen::OrderError),
//! [`MenuError`](menu::MenuError), [`WriteError`](receipt::WriteError), ...).
//! [`ShopError`] collects them with `#[from]` for callers of the façade.
//!
//! ### 5. Observability
//! `tracing` everywhere with structured fields. See the [`lifecycle::tracing`] module.
//!
//! ## Module Tour
//!
//! - [`model`] - dishes, addresses, orders and the order state machine
//! - [`menu`] - catalog views, the menu actor and catalog sources
//! - [`clients`] - the [`MenuClient`](clients::MenuClient)
//! - [`kitchen`] - queues, router, chefs, delivery staff and the shutdown signal
//! - [`receipt`] - the [`MenuWriter`](receipt::MenuWriter) sink and its JSON file writer
//! - [`lifecycle`] - [`Shop`](lifecycle::Shop), configuration and tracing setup
//! - [`mock`] - test doubles
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info TAKEOUT_CATALOG_URL=menu.json cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod error;
pub mod kitchen;
pub mod lifecycle;
pub mod menu;
pub mod mock;
pub mod model;
pub mod receipt;

pub use error::ShopError;
pub use lifecycle::{Shop, ShopConfig};
