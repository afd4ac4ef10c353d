//! Customer delivery orders.
//!
//! Orders are created through
//! [`DeliveryService::add_order`](crate::delivery::DeliveryService::add_order)
//! and only ever move from [`OrderStatus::Pending`] to [`OrderStatus::Assigned`].

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders. The first order placed gets `OrderId(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle state of an order. `Assigned` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Assigned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub dish_names: Vec<String>,
    pub quantities: Vec<u32>,
    pub customer_name: String,
    pub restaurant: String,
    /// Category of the restaurant when the order was placed.
    pub category: String,
    pub delivery_time: u32,
    pub delivery_distance: u32,
    pub status: OrderStatus,
}

/// Payload for placing a new order.
///
/// `dish_names` and `quantities` are parallel sequences; their lengths are
/// not checked against each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub dish_names: Vec<String>,
    pub quantities: Vec<u32>,
    pub customer_name: String,
    pub restaurant: String,
    pub delivery_time: u32,
    pub delivery_distance: u32,
}

impl Order {
    /// Builds a pending order from its creation payload and the category its
    /// restaurant belongs to at this moment.
    pub fn new(id: OrderId, category: impl Into<String>, params: OrderCreate) -> Self {
        Self {
            id,
            dish_names: params.dish_names,
            quantities: params.quantities,
            customer_name: params.customer_name,
            restaurant: params.restaurant,
            category: category.into(),
            delivery_time: params.delivery_time,
            delivery_distance: params.delivery_distance,
            status: OrderStatus::Pending,
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Assigned
    }

    /// Dish name / quantity pairs. Stops at the shorter of the two sequences.
    pub fn lines(&self) -> impl Iterator<Item = (&str, u32)> {
        self.dish_names
            .iter()
            .map(String::as_str)
            .zip(self.quantities.iter().copied())
    }

    /// True when the order is still pending and fits the requested slot and range.
    pub(crate) fn is_schedulable(&self, delivery_time: u32, max_distance: u32) -> bool {
        !self.is_delivered()
            && self.delivery_time == delivery_time
            && self.delivery_distance <= max_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order::new(
            OrderId(7),
            "Italian",
            OrderCreate {
                dish_names: vec!["Pizza".into(), "Tiramisu".into()],
                quantities: vec![2, 1],
                customer_name: "Ada".into(),
                restaurant: "Luigi's".into(),
                delivery_time: 19,
                delivery_distance: 4,
            },
        )
    }

    #[test]
    fn new_order_is_pending() {
        let order = sample();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(!order.is_delivered());
        assert_eq!(order.id.to_string(), "order_7");
        assert_eq!(order.category, "Italian");
    }

    #[test]
    fn lines_pair_names_with_quantities() {
        let order = sample();
        let lines: Vec<_> = order.lines().collect();
        assert_eq!(lines, vec![("Pizza", 2), ("Tiramisu", 1)]);
    }

    #[test]
    fn schedulable_requires_exact_time_and_distance_bound() {
        let mut order = sample();
        assert!(order.is_schedulable(19, 4));
        assert!(!order.is_schedulable(19, 3));
        assert!(!order.is_schedulable(20, 10));
        order.status = OrderStatus::Assigned;
        assert!(!order.is_schedulable(19, 4));
    }
}
