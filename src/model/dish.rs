//! A sellable menu item.
//!
//! Dishes are loaded once into the menu catalog and then shared read-only by every
//! order that references them. The JSON shape matches the remote menu document:
//!
//! ```json
//! { "name": "pork", "vegetarian": false, "calories": 800, "type": "MEAT", "price": 12.5 }
//! ```

use serde::{Deserialize, Serialize};

/// Broad category of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DishKind {
    Meat,
    Fish,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub vegetarian: bool,
    pub calories: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DishKind>,
}

impl Dish {
    /// Creates a new Dish.
    ///
    /// # Arguments
    /// * `name` - Display name on the menu
    /// * `vegetarian` - Whether the dish contains no meat or fish
    /// * `calories` - Energy content used by calorie partitioning
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, vegetarian: bool, calories: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            vegetarian,
            calories,
            price,
            kind: None,
        }
    }

    /// Sets the dish category.
    pub fn with_kind(mut self, kind: DishKind) -> Self {
        self.kind = Some(kind);
        self
    }
}
