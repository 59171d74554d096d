//! # Receipts
//!
//! Once an order is delivered its dishes are published as a receipt through a
//! [`MenuWriter`]. The writer is injected into the shop, so the sink (local files,
//! an in-memory recorder in tests) is chosen by whoever starts the shop.
//!
//! The receipt name is derived from the delivery address, see
//! [`Address::receipt_name`](crate::model::Address::receipt_name).

pub mod json_writer;

pub use json_writer::JsonFileWriter;

use crate::model::{Dish, FoodOrder};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Errors raised while publishing a receipt.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Receipt {name} could not be written: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Receipt {name} could not be serialized: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Receipt sink rejected {name}: {reason}")]
    Rejected { name: String, reason: String },
}

/// Sink for order receipts.
#[async_trait]
pub trait MenuWriter: Send + Sync {
    /// Publishes `items` under `name`.
    async fn publish(&self, name: &str, items: &[Dish]) -> Result<(), WriteError>;
}

/// Publishes the receipt for `order` under its address-derived name.
pub async fn publish_receipt(writer: &dyn MenuWriter, order: &FoodOrder) -> Result<(), WriteError> {
    let name = order.address.receipt_name();
    debug!(ack_id = %order.ack_id, %name, items = order.items.len(), "Publishing receipt");
    writer.publish(&name, &order.items).await
}
