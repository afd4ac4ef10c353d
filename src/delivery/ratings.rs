//! Restaurant ratings and the analytics derived from ratings and orders.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::{DeliveryError, DeliveryService};
use crate::model::Restaurant;

pub const MIN_RATING: i32 = 0;
pub const MAX_RATING: i32 = 5;

/// Orders two optional averages; an unrated restaurant ranks below any rated one.
fn compare_averages(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

impl DeliveryService {
    /// Records a rating between 0 and 5 inclusive. Out-of-range ratings and
    /// unknown restaurants are ignored.
    pub fn set_rating_for_restaurant(&mut self, restaurant: &str, rating: i32) {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            warn!(restaurant, rating, "Rating out of range, discarded");
            return;
        }
        match self.restaurants.get_mut(restaurant) {
            Some(r) => {
                r.add_rating(rating);
                info!(restaurant, rating, count = r.ratings().len(), "Rating recorded");
            }
            None => warn!(restaurant, rating, "Restaurant not found, rating discarded"),
        }
    }

    /// Names of rated restaurants by decreasing average rating. Equal averages
    /// keep name order.
    pub fn restaurants_average_rating(&self) -> Vec<String> {
        let mut rated: Vec<(&Restaurant, f64)> = self
            .restaurants
            .values()
            .filter_map(|r| r.average_rating().map(|avg| (r, avg)))
            .collect();
        rated.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        rated.into_iter().map(|(r, _)| r.name.clone()).collect()
    }

    /// Number of orders per category. Every registered category is present,
    /// with zero when none of its restaurants received an order. Orders stay
    /// under the category their restaurant had when they were placed.
    pub fn orders_per_category(&self) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> =
            self.categories.iter().map(|c| (c.clone(), 0)).collect();
        for order in &self.orders {
            *counts.entry(order.category.clone()).or_insert(0) += 1;
        }
        debug!(categories = counts.len(), "orders_per_category");
        counts
    }

    /// Name of the restaurant with the highest average rating. Unrated
    /// restaurants only win when nothing is rated; ties go to the first name.
    ///
    /// # Errors
    /// [`DeliveryError::NoRestaurants`] if no restaurant is registered.
    pub fn best_restaurant(&self) -> Result<String, DeliveryError> {
        self.restaurants
            .values()
            .fold(None::<&Restaurant>, |best, r| match best {
                Some(b)
                    if compare_averages(r.average_rating(), b.average_rating())
                        != Ordering::Greater =>
                {
                    Some(b)
                }
                _ => Some(r),
            })
            .map(|r| r.name.clone())
            .ok_or(DeliveryError::NoRestaurants)
    }
}
