//! The actor that owns the [`DeliveryService`].
//!
//! All requests arrive on one bounded mailbox and are handled one at a time,
//! so the order id counter and every collection are only ever touched from
//! the actor's task. No `Mutex` is needed around the service.

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::DeliveryRequest;
use crate::clients::DeliveryClient;
use crate::delivery::DeliveryService;

pub struct DeliveryActor {
    receiver: mpsc::Receiver<DeliveryRequest>,
    service: DeliveryService,
}

impl DeliveryActor {
    /// Creates the actor around an empty service, plus the client that feeds it.
    pub fn new(mailbox_size: usize) -> (Self, DeliveryClient) {
        Self::with_service(mailbox_size, DeliveryService::new())
    }

    /// Creates the actor around an already populated service.
    pub fn with_service(mailbox_size: usize, service: DeliveryService) -> (Self, DeliveryClient) {
        let (sender, receiver) = mpsc::channel(mailbox_size.max(1));
        let actor = Self { receiver, service };
        (actor, DeliveryClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped, then hands
    /// the service back so its final state can be inspected.
    pub async fn run(mut self) -> DeliveryService {
        info!("Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            restaurants = self.service.restaurant_count(),
            orders = self.service.order_count(),
            "Shutdown"
        );
        self.service
    }

    fn handle(&mut self, msg: DeliveryRequest) {
        let service = &mut self.service;
        // A closed response channel means the caller stopped waiting; the
        // state change still stands.
        match msg {
            DeliveryRequest::AddCategory { name, respond_to } => {
                debug!(category = %name, "AddCategory");
                let _ = respond_to.send(service.add_category(&name));
            }
            DeliveryRequest::Categories { respond_to } => {
                let _ = respond_to.send(service.categories());
            }
            DeliveryRequest::AddRestaurant { name, category, respond_to } => {
                debug!(restaurant = %name, %category, "AddRestaurant");
                let _ = respond_to.send(service.add_restaurant(&name, &category));
            }
            DeliveryRequest::RestaurantsForCategory { category, respond_to } => {
                let _ = respond_to.send(service.restaurants_for_category(&category));
            }
            DeliveryRequest::AddDish { name, restaurant, price, respond_to } => {
                debug!(dish = %name, %restaurant, price, "AddDish");
                let _ = respond_to.send(service.add_dish(&name, &restaurant, price));
            }
            DeliveryRequest::DishesByPrice { min_price, max_price, respond_to } => {
                let _ = respond_to.send(service.dishes_by_price(min_price, max_price));
            }
            DeliveryRequest::DishesForRestaurant { restaurant, respond_to } => {
                let _ = respond_to.send(service.dishes_for_restaurant(&restaurant));
            }
            DeliveryRequest::DishesByCategory { category, respond_to } => {
                let _ = respond_to.send(service.dishes_by_category(&category));
            }
            DeliveryRequest::AddOrder { params, respond_to } => {
                let _ = respond_to.send(service.add_order(params));
            }
            DeliveryRequest::GetOrder { id, respond_to } => {
                let order = service.order(id).cloned();
                debug!(order_id = %id, found = order.is_some(), "GetOrder");
                let _ = respond_to.send(order);
            }
            DeliveryRequest::ScheduleDelivery {
                delivery_time,
                max_distance,
                max_orders,
                respond_to,
            } => {
                debug!(delivery_time, max_distance, max_orders, "ScheduleDelivery");
                let _ = respond_to.send(service.schedule_delivery(
                    delivery_time,
                    max_distance,
                    max_orders,
                ));
            }
            DeliveryRequest::PendingOrders { respond_to } => {
                let _ = respond_to.send(service.pending_orders());
            }
            DeliveryRequest::SetRating { restaurant, rating, respond_to } => {
                service.set_rating_for_restaurant(&restaurant, rating);
                let _ = respond_to.send(());
            }
            DeliveryRequest::RestaurantsAverageRating { respond_to } => {
                let _ = respond_to.send(service.restaurants_average_rating());
            }
            DeliveryRequest::OrdersPerCategory { respond_to } => {
                let _ = respond_to.send(service.orders_per_category());
            }
            DeliveryRequest::BestRestaurant { respond_to } => {
                let _ = respond_to.send(service.best_restaurant());
            }
        }
    }
}
