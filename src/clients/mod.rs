//! Type-safe wrappers around the actor channels.

pub mod menu_client;

pub use menu_client::*;
