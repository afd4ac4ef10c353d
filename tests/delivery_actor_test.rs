use food_delivery::delivery::DeliveryService;
use food_delivery::delivery_actor::DeliveryActor;
use food_delivery::model::{OrderCreate, OrderId};

/// Real actor around a service populated before the loop starts.
/// The service comes back from `run` once the last client is dropped.
#[tokio::test]
async fn test_actor_with_prepared_service() {
    let mut service = DeliveryService::new();
    service.add_category("Japanese").unwrap();
    service.add_category("Italian").unwrap();
    service.add_restaurant("Sakura", "Japanese").unwrap();
    service.add_dish("Ramen", "Sakura", 11.0).unwrap();

    let (actor, client) = DeliveryActor::with_service(8, service);
    let actor_handle = tokio::spawn(actor.run());

    assert_eq!(client.categories().await.unwrap(), vec!["Italian", "Japanese"]);
    assert_eq!(client.dishes_for_restaurant("Sakura").await.unwrap(), vec!["Ramen"]);

    let params = OrderCreate {
        dish_names: vec!["Ramen".to_string()],
        quantities: vec![2],
        customer_name: "Bob".to_string(),
        restaurant: "Sakura".to_string(),
        delivery_time: 21,
        delivery_distance: 7,
    };
    assert_eq!(client.add_order(params).await.unwrap(), OrderId(1));
    assert!(client.schedule_delivery(21, 6, 5).await.unwrap().is_empty());

    let counts = client.orders_per_category().await.unwrap();
    assert_eq!(counts["Japanese"], 1);
    assert_eq!(counts["Italian"], 0);

    drop(client);
    let service = actor_handle.await.unwrap();
    assert_eq!(service.pending_orders(), 1);
    let order = service.order(OrderId(1)).unwrap();
    assert_eq!(order.lines().collect::<Vec<_>>(), vec![("Ramen", 2)]);
}
