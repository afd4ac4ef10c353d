//! Messages accepted by the [`DeliveryActor`](super::DeliveryActor).
//!
//! Each variant mirrors one [`DeliveryService`](crate::delivery::DeliveryService)
//! operation and carries a one-shot channel for its answer.

use std::collections::BTreeMap;

use tokio::sync::oneshot;

use crate::delivery::DeliveryError;
use crate::model::{Order, OrderCreate, OrderId};

/// One-shot response channel for operations that cannot fail.
pub type Reply<T> = oneshot::Sender<T>;

/// One-shot response channel for fallible operations.
pub type Response<T> = oneshot::Sender<Result<T, DeliveryError>>;

#[derive(Debug)]
pub enum DeliveryRequest {
    AddCategory {
        name: String,
        respond_to: Response<()>,
    },
    Categories {
        respond_to: Reply<Vec<String>>,
    },
    AddRestaurant {
        name: String,
        category: String,
        respond_to: Response<()>,
    },
    RestaurantsForCategory {
        category: String,
        respond_to: Reply<Vec<String>>,
    },
    AddDish {
        name: String,
        restaurant: String,
        price: f64,
        respond_to: Response<()>,
    },
    DishesByPrice {
        min_price: f64,
        max_price: f64,
        respond_to: Reply<BTreeMap<String, Vec<String>>>,
    },
    DishesForRestaurant {
        restaurant: String,
        respond_to: Reply<Vec<String>>,
    },
    DishesByCategory {
        category: String,
        respond_to: Reply<Vec<String>>,
    },
    AddOrder {
        params: OrderCreate,
        respond_to: Response<OrderId>,
    },
    GetOrder {
        id: OrderId,
        respond_to: Reply<Option<Order>>,
    },
    ScheduleDelivery {
        delivery_time: u32,
        max_distance: u32,
        max_orders: usize,
        respond_to: Reply<Vec<OrderId>>,
    },
    PendingOrders {
        respond_to: Reply<usize>,
    },
    SetRating {
        restaurant: String,
        rating: i32,
        respond_to: Reply<()>,
    },
    RestaurantsAverageRating {
        respond_to: Reply<Vec<String>>,
    },
    OrdersPerCategory {
        respond_to: Reply<BTreeMap<String, u64>>,
    },
    BestRestaurant {
        respond_to: Response<String>,
    },
}
