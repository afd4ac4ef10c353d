//! Category, restaurant and dish management.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, warn};

use super::{DeliveryError, DeliveryService};
use crate::model::Restaurant;

impl DeliveryService {
    /// Registers a category.
    ///
    /// # Errors
    /// [`DeliveryError::DuplicateCategory`] if the name is already registered.
    pub fn add_category(&mut self, category: &str) -> Result<(), DeliveryError> {
        if self.categories.contains(category) {
            warn!(category, "Category already present");
            return Err(DeliveryError::DuplicateCategory(category.to_string()));
        }
        self.categories.insert(category.to_string());
        info!(category, size = self.categories.len(), "Category added");
        Ok(())
    }

    /// All registered categories in sorted order.
    pub fn categories(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }

    /// Registers a restaurant in an existing category.
    ///
    /// Registering a name twice replaces the earlier restaurant, dropping its
    /// dishes and ratings.
    ///
    /// # Errors
    /// [`DeliveryError::UnknownCategory`] if the category was never added.
    pub fn add_restaurant(&mut self, name: &str, category: &str) -> Result<(), DeliveryError> {
        if !self.categories.contains(category) {
            warn!(restaurant = name, category, "Category not present");
            return Err(DeliveryError::UnknownCategory(category.to_string()));
        }
        let replaced = self
            .restaurants
            .insert(name.to_string(), Restaurant::new(name, category))
            .is_some();
        info!(restaurant = name, category, replaced, "Restaurant added");
        Ok(())
    }

    pub fn restaurant(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.get(name)
    }

    /// Names of the restaurants in `category`, ascending. Empty when the
    /// category is unknown or has no restaurants.
    pub fn restaurants_for_category(&self, category: &str) -> Vec<String> {
        let names: Vec<String> = self
            .restaurants
            .values()
            .filter(|r| r.category == category)
            .map(|r| r.name.clone())
            .collect();
        debug!(category, found = names.len(), "restaurants_for_category");
        names
    }

    /// Adds a dish to a restaurant's menu.
    ///
    /// # Errors
    /// - [`DeliveryError::UnknownRestaurant`] if the restaurant does not exist.
    /// - [`DeliveryError::DuplicateDish`] if the restaurant already sells a dish with this name.
    pub fn add_dish(&mut self, name: &str, restaurant: &str, price: f64) -> Result<(), DeliveryError> {
        let Some(r) = self.restaurants.get_mut(restaurant) else {
            warn!(dish = name, restaurant, "Restaurant not found");
            return Err(DeliveryError::UnknownRestaurant(restaurant.to_string()));
        };
        if !r.add_dish(name, price) {
            warn!(dish = name, restaurant, "Dish already present");
            return Err(DeliveryError::DuplicateDish {
                restaurant: restaurant.to_string(),
                dish: name.to_string(),
            });
        }
        info!(dish = name, restaurant, price, "Dish added");
        Ok(())
    }

    /// Dish names priced within `[min_price, max_price]`, grouped by
    /// restaurant. Restaurants with no dish in range are left out.
    pub fn dishes_by_price(&self, min_price: f64, max_price: f64) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for dish in self
            .restaurants
            .values()
            .flat_map(|r| r.dishes())
            .filter(|d| d.price_in_range(min_price, max_price))
        {
            grouped
                .entry(dish.restaurant.clone())
                .or_default()
                .push(dish.name.clone());
        }
        debug!(min_price, max_price, restaurants = grouped.len(), "dishes_by_price");
        grouped
    }

    /// Alphabetical dish names of a restaurant; empty if it does not exist.
    pub fn dishes_for_restaurant(&self, restaurant: &str) -> Vec<String> {
        self.restaurants
            .get(restaurant)
            .map(|r| r.dishes().map(|d| d.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Distinct dish names sold in a category, in first-encountered order.
    pub fn dishes_by_category(&self, category: &str) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut names = Vec::new();
        for dish in self
            .restaurants
            .values()
            .filter(|r| r.category == category)
            .flat_map(|r| r.dishes())
        {
            if seen.insert(dish.name.as_str()) {
                names.push(dish.name.clone());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DeliveryService {
        let mut service = DeliveryService::new();
        service.add_category("Italian").unwrap();
        service.add_category("Chinese").unwrap();
        service.add_restaurant("Mario's", "Italian").unwrap();
        service.add_restaurant("Luigi's", "Italian").unwrap();
        service.add_restaurant("Panda", "Chinese").unwrap();
        service.add_dish("Pizza", "Luigi's", 9.5).unwrap();
        service.add_dish("Lasagna", "Luigi's", 12.0).unwrap();
        service.add_dish("Pizza", "Mario's", 8.0).unwrap();
        service.add_dish("Calzone", "Mario's", 4.99).unwrap();
        service.add_dish("Dumplings", "Panda", 10.0).unwrap();
        service
    }

    #[test]
    fn duplicate_category_fails_on_second_add() {
        let mut service = DeliveryService::new();
        service.add_category("Thai").unwrap();
        let err = service.add_category("Thai").unwrap_err();
        assert_eq!(err, DeliveryError::DuplicateCategory("Thai".into()));
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        let mut service = DeliveryService::new();
        for c in ["Sushi", "Burger", "Italian"] {
            service.add_category(c).unwrap();
        }
        let _ = service.add_category("Burger");
        assert_eq!(service.categories(), vec!["Burger", "Italian", "Sushi"]);
    }

    #[test]
    fn restaurant_requires_known_category() {
        let mut service = DeliveryService::new();
        let err = service.add_restaurant("Luigi's", "Italian").unwrap_err();
        assert_eq!(err, DeliveryError::UnknownCategory("Italian".into()));
        assert!(service.restaurant("Luigi's").is_none());
    }

    #[test]
    fn re_adding_restaurant_overwrites_it() {
        let mut service = catalog();
        service.add_restaurant("Luigi's", "Chinese").unwrap();
        let r = service.restaurant("Luigi's").unwrap();
        assert_eq!(r.category, "Chinese");
        assert_eq!(r.dishes().count(), 0);
        assert_eq!(service.restaurants_for_category("Italian"), vec!["Mario's"]);
    }

    #[test]
    fn restaurants_for_category_ascending() {
        let service = catalog();
        assert_eq!(service.restaurants_for_category("Italian"), vec!["Luigi's", "Mario's"]);
        assert!(service.restaurants_for_category("Mexican").is_empty());
    }

    #[test]
    fn add_dish_errors() {
        let mut service = catalog();
        assert_eq!(
            service.add_dish("Soup", "Nowhere", 3.0).unwrap_err(),
            DeliveryError::UnknownRestaurant("Nowhere".into())
        );
        assert_eq!(
            service.add_dish("Pizza", "Luigi's", 11.0).unwrap_err(),
            DeliveryError::DuplicateDish {
                restaurant: "Luigi's".into(),
                dish: "Pizza".into()
            }
        );
    }

    #[test]
    fn dishes_by_price_bounds_are_inclusive() {
        let service = catalog();
        let by_price = service.dishes_by_price(5.0, 10.0);
        assert_eq!(by_price.get("Luigi's"), Some(&vec!["Pizza".to_string()]));
        assert_eq!(by_price.get("Mario's"), Some(&vec!["Pizza".to_string()]));
        assert_eq!(by_price.get("Panda"), Some(&vec!["Dumplings".to_string()]));
        assert_eq!(by_price.len(), 3);
    }

    #[test]
    fn dishes_by_price_omits_restaurants_without_match() {
        let service = catalog();
        let by_price = service.dishes_by_price(11.0, 20.0);
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price["Luigi's"], vec!["Lasagna"]);
    }

    #[test]
    fn dishes_for_restaurant_sorted() {
        let service = catalog();
        assert_eq!(service.dishes_for_restaurant("Luigi's"), vec!["Lasagna", "Pizza"]);
        assert!(service.dishes_for_restaurant("Nowhere").is_empty());
    }

    #[test]
    fn dishes_by_category_deduplicates_by_name() {
        let service = catalog();
        assert_eq!(
            service.dishes_by_category("Italian"),
            vec!["Lasagna", "Pizza", "Calzone"]
        );
        assert!(service.dishes_by_category("Mexican").is_empty());
    }
}
