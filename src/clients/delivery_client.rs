use std::collections::BTreeMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::delivery::DeliveryError;
use crate::delivery_actor::{ActorError, DeliveryRequest};
use crate::model::{Order, OrderCreate, OrderId};

/// Client for interacting with the delivery actor.
///
/// Cheap to clone; every clone feeds the same mailbox. Each method mirrors the
/// [`DeliveryService`](crate::delivery::DeliveryService) operation of the same
/// name and additionally fails with [`DeliveryError::ActorCommunication`] when
/// the actor is gone.
#[derive(Clone)]
pub struct DeliveryClient {
    sender: mpsc::Sender<DeliveryRequest>,
}

impl DeliveryClient {
    pub fn new(sender: mpsc::Sender<DeliveryRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> DeliveryRequest,
    ) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)
    }

    #[instrument(skip(self))]
    pub async fn add_category(&self, name: &str) -> Result<(), DeliveryError> {
        debug!("Sending request");
        let name = name.to_string();
        self.call(|respond_to| DeliveryRequest::AddCategory { name, respond_to })
            .await?
    }

    pub async fn categories(&self) -> Result<Vec<String>, DeliveryError> {
        Ok(self
            .call(|respond_to| DeliveryRequest::Categories { respond_to })
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn add_restaurant(&self, name: &str, category: &str) -> Result<(), DeliveryError> {
        debug!("Sending request");
        let (name, category) = (name.to_string(), category.to_string());
        self.call(|respond_to| DeliveryRequest::AddRestaurant {
            name,
            category,
            respond_to,
        })
        .await?
    }

    pub async fn restaurants_for_category(&self, category: &str) -> Result<Vec<String>, DeliveryError> {
        let category = category.to_string();
        Ok(self
            .call(|respond_to| DeliveryRequest::RestaurantsForCategory { category, respond_to })
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn add_dish(&self, name: &str, restaurant: &str, price: f64) -> Result<(), DeliveryError> {
        debug!("Sending request");
        let (name, restaurant) = (name.to_string(), restaurant.to_string());
        self.call(|respond_to| DeliveryRequest::AddDish {
            name,
            restaurant,
            price,
            respond_to,
        })
        .await?
    }

    pub async fn dishes_by_price(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<BTreeMap<String, Vec<String>>, DeliveryError> {
        Ok(self
            .call(|respond_to| DeliveryRequest::DishesByPrice {
                min_price,
                max_price,
                respond_to,
            })
            .await?)
    }

    pub async fn dishes_for_restaurant(&self, restaurant: &str) -> Result<Vec<String>, DeliveryError> {
        let restaurant = restaurant.to_string();
        Ok(self
            .call(|respond_to| DeliveryRequest::DishesForRestaurant { restaurant, respond_to })
            .await?)
    }

    pub async fn dishes_by_category(&self, category: &str) -> Result<Vec<String>, DeliveryError> {
        let category = category.to_string();
        Ok(self
            .call(|respond_to| DeliveryRequest::DishesByCategory { category, respond_to })
            .await?)
    }

    #[instrument(skip(self, params), fields(restaurant = %params.restaurant))]
    pub async fn add_order(&self, params: OrderCreate) -> Result<OrderId, DeliveryError> {
        debug!(?params, "add_order called");
        self.call(|respond_to| DeliveryRequest::AddOrder { params, respond_to })
            .await?
    }

    pub async fn order(&self, id: OrderId) -> Result<Option<Order>, DeliveryError> {
        Ok(self
            .call(|respond_to| DeliveryRequest::GetOrder { id, respond_to })
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn schedule_delivery(
        &self,
        delivery_time: u32,
        max_distance: u32,
        max_orders: usize,
    ) -> Result<Vec<OrderId>, DeliveryError> {
        debug!("Sending request");
        Ok(self
            .call(|respond_to| DeliveryRequest::ScheduleDelivery {
                delivery_time,
                max_distance,
                max_orders,
                respond_to,
            })
            .await?)
    }

    pub async fn pending_orders(&self) -> Result<usize, DeliveryError> {
        Ok(self
            .call(|respond_to| DeliveryRequest::PendingOrders { respond_to })
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn set_rating_for_restaurant(&self, restaurant: &str, rating: i32) -> Result<(), DeliveryError> {
        let restaurant = restaurant.to_string();
        Ok(self
            .call(|respond_to| DeliveryRequest::SetRating {
                restaurant,
                rating,
                respond_to,
            })
            .await?)
    }

    pub async fn restaurants_average_rating(&self) -> Result<Vec<String>, DeliveryError> {
        Ok(self
            .call(|respond_to| DeliveryRequest::RestaurantsAverageRating { respond_to })
            .await?)
    }

    pub async fn orders_per_category(&self) -> Result<BTreeMap<String, u64>, DeliveryError> {
        Ok(self
            .call(|respond_to| DeliveryRequest::OrdersPerCategory { respond_to })
            .await?)
    }

    pub async fn best_restaurant(&self) -> Result<String, DeliveryError> {
        self.call(|respond_to| DeliveryRequest::BestRestaurant { respond_to })
            .await?
    }
}
