//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; log lines carry structured fields such as
//! `ack_id`, `floor`, `chef` and `courier` instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and order milestones
//! RUST_LOG=info cargo run
//!
//! # Queue traffic, menu requests and full order payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## Order Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Catalog loaded source="menu.json" count=12
//! INFO Shop open chefs=10 delivery_staff=7
//! INFO route: Order placed ack_id=order_1 floor=3
//! INFO Order ready chef="Alice Waters" ack_id=order_1 floor=3
//! INFO Delivered courier="Thomas Sims7" ack_id=order_1 floor=3
//! INFO Receipt written path="receipts/2-3-14.json" items=2
//! ```
//!
//! **With `RUST_LOG=debug`** the same flow also shows the `Enqueued`, `Preparing`,
//! `Delivering` and `Publishing receipt` steps with their queue depths.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
