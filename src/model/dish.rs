use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A priced menu item sold by exactly one restaurant.
///
/// The owning restaurant is held as a name key into the service's restaurant
/// map rather than a reference. Two dishes compare equal when their names
/// match, regardless of price or owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: f64,
    pub restaurant: String,
}

impl Dish {
    /// Creates a new Dish instance.
    ///
    /// # Arguments
    /// * `name` - Dish name, unique within its restaurant
    /// * `price` - Dish price
    /// * `restaurant` - Name of the owning restaurant
    pub fn new(name: impl Into<String>, price: f64, restaurant: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            restaurant: restaurant.into(),
        }
    }

    /// Returns true when `min <= price <= max`.
    pub fn price_in_range(&self, min: f64, max: f64) -> bool {
        self.price >= min && self.price <= max
    }
}

impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Dish {}

impl PartialOrd for Dish {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dish {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
