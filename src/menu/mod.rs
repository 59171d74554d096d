//! # Menu
//!
//! The live menu is owned by a single [`MenuActor`] task and reached through a
//! cloneable [`MenuClient`](crate::clients::MenuClient). Derived views (vegetarian,
//! calorie partition) are computed inside the actor and returned as owned snapshots.
//! [`slice`] works on any list the caller already holds.
//!
//! The initial menu comes from a [`CatalogSource`].

pub mod actor;
pub mod catalog;
pub mod error;
pub mod message;
pub mod source;

pub use actor::*;
pub use catalog::*;
pub use error::*;
pub use message::*;
pub use source::*;
