//! Order placement and delivery scheduling.

use tracing::{debug, info, warn};

use super::{DeliveryError, DeliveryService};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};

impl DeliveryService {
    /// Places an order and returns its id. Ids start at 1 and are never reused.
    ///
    /// The delivery time and the pairing of dish names with quantities are
    /// stored as given.
    ///
    /// # Errors
    /// [`DeliveryError::UnknownRestaurant`] if the restaurant does not exist.
    pub fn add_order(&mut self, params: OrderCreate) -> Result<OrderId, DeliveryError> {
        debug!(?params, "add_order called");
        let Some(category) = self
            .restaurants
            .get(&params.restaurant)
            .map(|r| r.category.clone())
        else {
            warn!(restaurant = %params.restaurant, "Restaurant not found");
            return Err(DeliveryError::UnknownRestaurant(params.restaurant));
        };
        self.last_order_id += 1;
        let id = OrderId(self.last_order_id);
        self.orders.push(Order::new(id, category, params));
        info!(order_id = %id, size = self.orders.len(), "Order created");
        Ok(id)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Assigns up to `max_orders` pending orders due at `delivery_time` and
    /// within `max_distance`, in arrival order. Assigned orders are never
    /// returned again.
    pub fn schedule_delivery(
        &mut self,
        delivery_time: u32,
        max_distance: u32,
        max_orders: usize,
    ) -> Vec<OrderId> {
        let assigned: Vec<OrderId> = self
            .orders
            .iter_mut()
            .filter(|o| o.is_schedulable(delivery_time, max_distance))
            .take(max_orders)
            .map(|o| {
                o.status = OrderStatus::Assigned;
                o.id
            })
            .collect();
        info!(delivery_time, max_distance, assigned = assigned.len(), "Deliveries scheduled");
        assigned
    }

    /// Number of orders not yet assigned.
    pub fn pending_orders(&self) -> usize {
        self.orders.iter().filter(|o| !o.is_delivered()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(restaurant: &str, time: u32, distance: u32) -> OrderCreate {
        OrderCreate {
            dish_names: vec!["Pizza".into()],
            quantities: vec![1],
            customer_name: "Ada".into(),
            restaurant: restaurant.into(),
            delivery_time: time,
            delivery_distance: distance,
        }
    }

    fn service() -> DeliveryService {
        let mut service = DeliveryService::new();
        service.add_category("Italian").unwrap();
        service.add_restaurant("Luigi's", "Italian").unwrap();
        service.add_dish("Pizza", "Luigi's", 9.5).unwrap();
        service
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut service = service();
        let ids: Vec<_> = (0..3)
            .map(|_| service.add_order(order("Luigi's", 12, 2)).unwrap())
            .collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(2), OrderId(3)]);
    }

    #[test]
    fn unknown_restaurant_is_rejected_without_consuming_an_id() {
        let mut service = service();
        let err = service.add_order(order("Nowhere", 12, 2)).unwrap_err();
        assert_eq!(err, DeliveryError::UnknownRestaurant("Nowhere".into()));
        assert_eq!(service.add_order(order("Luigi's", 12, 2)).unwrap(), OrderId(1));
        assert_eq!(service.order_count(), 1);
    }

    #[test]
    fn delivery_time_is_not_validated() {
        let mut service = service();
        let id = service.add_order(order("Luigi's", 3, 0)).unwrap();
        assert_eq!(service.order(id).map(|o| o.delivery_time), Some(3));
    }

    #[test]
    fn schedule_filters_and_limits_in_arrival_order() {
        let mut service = service();
        service.add_order(order("Luigi's", 12, 2)).unwrap();
        service.add_order(order("Luigi's", 13, 2)).unwrap();
        service.add_order(order("Luigi's", 12, 9)).unwrap();
        service.add_order(order("Luigi's", 12, 5)).unwrap();
        service.add_order(order("Luigi's", 12, 1)).unwrap();

        assert_eq!(service.schedule_delivery(12, 5, 2), vec![OrderId(1), OrderId(4)]);
        assert_eq!(service.pending_orders(), 3);
        assert_eq!(service.schedule_delivery(12, 5, 2), vec![OrderId(5)]);
        assert!(service.schedule_delivery(12, 5, 2).is_empty());
        assert_eq!(service.pending_orders(), 2);
        assert!(service.order(OrderId(4)).unwrap().is_delivered());
        assert!(!service.order(OrderId(3)).unwrap().is_delivered());
    }

    #[test]
    fn schedule_with_zero_limit_assigns_nothing() {
        let mut service = service();
        service.add_order(order("Luigi's", 12, 2)).unwrap();
        assert!(service.schedule_delivery(12, 5, 0).is_empty());
        assert_eq!(service.pending_orders(), 1);
    }
}
