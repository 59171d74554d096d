//! The menu catalog and its read-only views.

use crate::menu::MenuError;
use crate::model::Dish;

/// Dishes split by a calorie threshold, catalog order kept inside each group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaloriePartition {
    /// Dishes with `calories <= threshold`.
    pub within_limit: Vec<Dish>,
    /// Dishes with `calories > threshold`.
    pub over_limit: Vec<Dish>,
}

/// Ordered list of sellable dishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    dishes: Vec<Dish>,
}

impl MenuCatalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn list(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn append(&mut self, dish: Dish) {
        self.dishes.push(dish);
    }

    pub fn append_all(&mut self, dishes: impl IntoIterator<Item = Dish>) {
        self.dishes.extend(dishes);
    }

    /// Swaps in a whole new menu.
    pub fn replace(&mut self, dishes: Vec<Dish>) {
        self.dishes = dishes;
    }

    pub fn vegetarian(&self) -> Vec<Dish> {
        self.dishes.iter().filter(|d| d.vegetarian).cloned().collect()
    }

    pub fn partition_by_calorie_limit(&self, threshold: u32) -> CaloriePartition {
        let (within_limit, over_limit) = self
            .dishes
            .iter()
            .cloned()
            .partition(|d| d.calories <= threshold);
        CaloriePartition {
            within_limit,
            over_limit,
        }
    }
}

/// Returns `dishes[start..end]` as an owned list.
///
/// # Errors
/// [`MenuError::OutOfRange`] when `start > end` or `end > dishes.len()`. Out-of-range
/// input is never clamped.
pub fn slice(dishes: &[Dish], start: usize, end: usize) -> Result<Vec<Dish>, MenuError> {
    dishes
        .get(start..end)
        .map(<[Dish]>::to_vec)
        .ok_or(MenuError::OutOfRange {
            start,
            end,
            len: dishes.len(),
        })
}
