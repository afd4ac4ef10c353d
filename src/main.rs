use food_delivery::config::SystemConfig;
use food_delivery::delivery::DeliveryError;
use food_delivery::lifecycle::tracing::setup_tracing;
use food_delivery::lifecycle::DeliverySystem;
use food_delivery::model::OrderCreate;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting delivery demo");

    let system = DeliverySystem::new(SystemConfig::from_env());
    let client = system.client.clone();

    let span = tracing::info_span!("catalog_setup");
    async {
        info!("Registering catalog");
        client.add_category("Italian").await?;
        client.add_category("Japanese").await?;
        client.add_restaurant("Luigi's", "Italian").await?;
        client.add_restaurant("Sakura", "Japanese").await?;
        client.add_dish("Pizza", "Luigi's", 9.5).await?;
        client.add_dish("Lasagna", "Luigi's", 12.0).await?;
        client.add_dish("Ramen", "Sakura", 11.0).await?;
        Ok::<_, DeliveryError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let by_price = client.dishes_by_price(9.0, 11.0).await.map_err(|e| e.to_string())?;
    info!(?by_price, "Dishes between 9 and 11");

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let params = OrderCreate {
            dish_names: vec!["Pizza".to_string(), "Lasagna".to_string()],
            quantities: vec![2, 1],
            customer_name: "Alice".to_string(),
            restaurant: "Luigi's".to_string(),
            delivery_time: 8,
            delivery_distance: 3,
        };
        let id = client.add_order(params).await?;
        let scheduled = client.schedule_delivery(8, 5, 10).await?;
        Ok::<_, DeliveryError>((id, scheduled))
    }
    .instrument(span)
    .await;

    match order_result {
        Ok((order_id, scheduled)) => info!(%order_id, ?scheduled, "Order placed and scheduled"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    for (restaurant, rating) in [("Luigi's", 4), ("Luigi's", 5), ("Sakura", 3), ("Sakura", 9)] {
        client
            .set_rating_for_restaurant(restaurant, rating)
            .await
            .map_err(|e| e.to_string())?;
    }
    match client.best_restaurant().await {
        Ok(best) => info!(%best, "Best restaurant"),
        Err(e) => error!(error = %e, "Ranking failed"),
    }

    drop(client);
    let service = system.shutdown().await?;
    info!(
        pending = service.pending_orders(),
        per_category = ?service.orders_per_category(),
        "Application completed successfully"
    );
    Ok(())
}
