//! Error types for the menu actor and catalog views.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested slice does not fit inside the list.
    #[error("Slice [{start}, {end}) out of range for {len} dishes")]
    OutOfRange { start: usize, end: usize, len: usize },

    /// An error occurred while communicating with the menu actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
