use restaurant::clients::ActorClient;
use restaurant::config::RestaurantConfig;
use restaurant::framework::FrameworkError;
use restaurant::lifecycle::RestaurantService;
use restaurant::restaurant_actor::RestaurantError;

const CONFIG: &str = r#"{
    "name": "Amelie's cafe",
    "location": "Chennai",
    "opening_time": "10:30:00",
    "closing_time": "22:00:00",
    "menu": [
        { "name": "Sweet corn soup", "price": 119 },
        { "name": "Vegetable lasagne", "price": 269 }
    ],
    "buffer_size": 4
}"#;

/// Full end-to-end test: config, service, concurrent clients, shutdown.
#[tokio::test]
async fn test_full_restaurant_service_integration() {
    let config = RestaurantConfig::from_json_str(CONFIG).expect("Failed to parse config");
    let service = RestaurantService::from_config(&config).expect("Failed to start service");

    // Many tasks add items concurrently; none is lost
    let mut tasks = Vec::new();
    for i in 0..20u32 {
        let client = service.client.clone();
        tasks.push(tokio::spawn(async move {
            client.add_to_menu(&format!("Special {}", i), 100 + i).await
        }));
    }
    for task in tasks {
        task.await.unwrap().expect("Failed to add item");
    }

    let menu = service.client.menu().await.expect("Failed to get menu");
    assert_eq!(menu.len(), 22);
    // Starter dishes keep their position
    assert_eq!(menu[0].name, "Sweet corn soup");
    assert_eq!(menu[1].name, "Vegetable lasagne");

    // Snapshot agrees with the menu
    let snapshot = service.client.snapshot().await.expect("Failed to get snapshot");
    assert_eq!(snapshot.menu(), menu.as_slice());
    assert_eq!(snapshot.name(), "Amelie's cafe");

    let order = vec!["Sweet corn soup".to_string(), "Special 0".to_string()];
    let total = service
        .client
        .calculate_total_order_value(Some(order))
        .await
        .expect("Failed to price order");
    assert_eq!(total, 219);

    // Shutdown hands back the final state
    let restaurant = service.shutdown().await.expect("Shutdown failed");
    assert_eq!(restaurant.menu().len(), 22);
}

#[tokio::test]
async fn test_client_fails_after_actor_stops() {
    let (actor, client) = restaurant::restaurant_actor::new(
        RestaurantConfig::from_json_str(CONFIG).unwrap().build_restaurant(),
        4,
    );
    drop(actor);

    let result = client.add_to_menu("Sizzling brownie", 319).await;
    assert_eq!(result, Err(RestaurantError::Actor(FrameworkError::ActorClosed)));
}
