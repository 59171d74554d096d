//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`Shop`] - opens the shop, owns every queue and worker, and shuts them down again
//! - [`ShopConfig`] - staff rosters, timings and locations, from defaults or `TAKEOUT_*`
//!   environment variables
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod config;
pub mod shop;
pub mod tracing;

pub use config::*;
pub use shop::*;
pub use self::tracing::*;
