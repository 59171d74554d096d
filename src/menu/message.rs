//! Requests understood by the menu actor.

use crate::menu::CaloriePartition;
use crate::model::Dish;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Reply<T> = oneshot::Sender<T>;

/// Message sent to the [`MenuActor`](crate::menu::MenuActor).
///
/// Reads reply with an owned snapshot so callers never hold a view into the live
/// catalog. Mutations reply with the catalog size after the change.
#[derive(Debug)]
pub enum MenuRequest {
    List {
        respond_to: Reply<Vec<Dish>>,
    },
    Append {
        dish: Dish,
        respond_to: Reply<usize>,
    },
    AppendAll {
        dishes: Vec<Dish>,
        respond_to: Reply<usize>,
    },
    Replace {
        dishes: Vec<Dish>,
        respond_to: Reply<usize>,
    },
    Vegetarian {
        respond_to: Reply<Vec<Dish>>,
    },
    PartitionByCalories {
        threshold: u32,
        respond_to: Reply<CaloriePartition>,
    },
}
