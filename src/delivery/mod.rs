//! The delivery facade: categories, restaurants, dishes, orders and ratings.
//!
//! [`DeliveryService`] owns every collection and is driven through plain
//! `&mut self` calls. It is not synchronized; callers that share it across
//! tasks go through [`DeliveryClient`](crate::clients::DeliveryClient), which
//! funnels every request into a single actor.
//!
//! Operations are split by concern:
//! - [`catalog`]: categories, restaurants and dishes
//! - [`orders`]: order placement and delivery scheduling
//! - [`ratings`]: ratings and the analytics built on them

pub mod catalog;
pub mod error;
pub mod orders;
pub mod ratings;

pub use error::*;

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Order, Restaurant};

#[derive(Debug, Default)]
pub struct DeliveryService {
    categories: BTreeSet<String>,
    restaurants: BTreeMap<String, Restaurant>,
    orders: Vec<Order>,
    last_order_id: u32,
}

impl DeliveryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restaurant_count(&self) -> usize {
        self.restaurants.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
