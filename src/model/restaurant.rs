use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Dish;

/// A named vendor belonging to exactly one category.
///
/// Dishes are kept sorted by name. Ratings are kept in submission order and
/// are assumed to be already validated by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub category: String,
    dishes: BTreeMap<String, Dish>,
    ratings: Vec<i32>,
}

impl Restaurant {
    /// Creates a restaurant with no dishes and no ratings.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            dishes: BTreeMap::new(),
            ratings: Vec::new(),
        }
    }

    /// Inserts a dish. Returns `false` and leaves the menu untouched when a
    /// dish with the same name already exists.
    pub fn add_dish(&mut self, name: &str, price: f64) -> bool {
        if self.dishes.contains_key(name) {
            return false;
        }
        self.dishes
            .insert(name.to_string(), Dish::new(name, price, self.name.clone()));
        true
    }

    pub fn dish(&self, name: &str) -> Option<&Dish> {
        self.dishes.get(name)
    }

    /// Dishes in name order.
    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.values()
    }

    pub fn add_rating(&mut self, rating: i32) {
        self.ratings.push(rating);
    }

    pub fn ratings(&self) -> &[i32] {
        &self.ratings
    }

    pub fn has_ratings(&self) -> bool {
        !self.ratings.is_empty()
    }

    /// Sum of ratings divided by their count, `None` when unrated.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: i64 = self.ratings.iter().map(|&r| i64::from(r)).sum();
        Some(sum as f64 / self.ratings.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_dish_is_rejected() {
        let mut r = Restaurant::new("Luigi's", "Italian");
        assert!(r.add_dish("Pizza", 9.5));
        assert!(!r.add_dish("Pizza", 11.0));
        assert_eq!(r.dish("Pizza").map(|d| d.price), Some(9.5));
        assert_eq!(r.dish("Pizza").map(|d| d.restaurant.as_str()), Some("Luigi's"));
    }

    #[test]
    fn dishes_iterate_in_name_order() {
        let mut r = Restaurant::new("Luigi's", "Italian");
        r.add_dish("Tiramisu", 5.0);
        r.add_dish("Lasagna", 12.0);
        r.add_dish("Pizza", 9.5);
        let names: Vec<_> = r.dishes().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Lasagna", "Pizza", "Tiramisu"]);
    }

    #[test]
    fn average_rating() {
        let mut r = Restaurant::new("Luigi's", "Italian");
        assert!(!r.has_ratings());
        assert_eq!(r.average_rating(), None);
        r.add_rating(4);
        r.add_rating(5);
        assert_eq!(r.average_rating(), Some(4.5));
        assert_eq!(r.ratings(), &[4, 5]);
    }
}
