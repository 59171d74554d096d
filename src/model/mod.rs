//! Pure data structures shared by the menu, the kitchen and the delivery pool.

pub mod address;
pub mod dish;
pub mod order;

pub use address::*;
pub use dish::*;
pub use order::*;
