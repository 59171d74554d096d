use crate::kitchen::OrderError;
use crate::lifecycle::ConfigError;
use crate::menu::MenuError;
use crate::receipt::WriteError;
use thiserror::Error;

/// Top-level error for callers of the [`Shop`](crate::lifecycle::Shop) façade.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Receipt(#[from] WriteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A worker or the menu actor panicked.
    #[error("Task failed: {0}")]
    TaskFailed(String),
}
