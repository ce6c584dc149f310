//! Demo: starts a restaurant service, changes the menu from several tasks and prices an order.
//!
//! Reads a JSON [`RestaurantConfig`] from the path in `RESTAURANT_CONFIG` if set,
//! otherwise uses Amelie's cafe.

use chrono::NaiveTime;
use restaurant::clients::ActorClient;
use restaurant::config::RestaurantConfig;
use restaurant::lifecycle::{setup_tracing, RestaurantService};
use restaurant::model::Item;
use restaurant::restaurant_actor::{RestaurantError, DEFAULT_BUFFER_SIZE};
use tracing::{error, info, Instrument};

fn parse_time(s: &str) -> Result<NaiveTime, RestaurantError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|e| RestaurantError::Config(e.to_string()))
}

fn default_config() -> Result<RestaurantConfig, RestaurantError> {
    Ok(RestaurantConfig {
        name: "Amelie's cafe".to_string(),
        location: "Chennai".to_string(),
        opening_time: parse_time("10:30:00")?,
        closing_time: parse_time("22:00:00")?,
        menu: vec![
            Item::new("Sweet corn soup", 119),
            Item::new("Vegetable lasagne", 269),
        ],
        buffer_size: DEFAULT_BUFFER_SIZE,
    })
}

#[tokio::main]
async fn main() -> Result<(), RestaurantError> {
    setup_tracing();

    let config = match std::env::var("RESTAURANT_CONFIG") {
        Ok(path) => RestaurantConfig::from_file(path)?,
        Err(_) => default_config()?,
    };

    let service = RestaurantService::from_config(&config)?;
    let client = service.client.clone();

    let now = client.current_time().await?;
    let open = client.is_restaurant_open().await?;
    info!(%now, open, "Restaurant status");

    // Several tasks edit the menu at once; the actor applies them one by one
    let span = tracing::info_span!("menu_update");
    async {
        let additions = [("Sizzling brownie", 319), ("Masala chai", 49)];
        let mut tasks = Vec::new();
        for (name, price) in additions {
            let client = client.clone();
            tasks.push(tokio::spawn(async move { client.add_to_menu(name, price).await }));
        }
        for task in tasks {
            match task.await {
                Ok(result) => result?,
                Err(e) => return Err(RestaurantError::ActorTaskFailed(e.to_string())),
            }
        }
        Ok::<(), RestaurantError>(())
    }
    .instrument(span)
    .await?;

    if let Err(e) = client.remove_from_menu("French fries").await {
        error!(error = %e, "Menu update failed");
    }

    let selected: Vec<String> = client
        .menu()
        .await?
        .into_iter()
        .map(|item| item.name)
        .collect();
    let total = client.calculate_total_order_value(Some(selected)).await?;
    info!(total, "Order priced");

    let snapshot = client.snapshot().await?;
    println!("{}", snapshot);

    drop(client);
    let restaurant = service.shutdown().await?;
    info!(menu_size = restaurant.menu().len(), "Done");

    Ok(())
}
