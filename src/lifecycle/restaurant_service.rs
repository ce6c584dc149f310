use crate::clients::RestaurantClient;
use crate::config::RestaurantConfig;
use crate::model::Restaurant;
use crate::restaurant_actor::RestaurantError;
use tracing::{error, info};

/// Runs one restaurant behind an actor so it can be shared between tasks.
///
/// `RestaurantService` is responsible for:
/// - **Lifecycle Management**: Spawning the actor task and stopping it again
/// - **Access**: Handing out [`RestaurantClient`]s; clone the client for each task
///
/// # Example
///
/// ```ignore
/// let service = RestaurantService::new(restaurant, 32);
///
/// service.client.add_to_menu("Sizzling brownie", 319).await?;
/// let open = service.client.is_restaurant_open().await?;
///
/// // Gracefully shut down and get the final state back
/// let restaurant = service.shutdown().await?;
/// ```
pub struct RestaurantService {
    /// Client for interacting with the Restaurant actor
    pub client: RestaurantClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<Restaurant>,
}

impl RestaurantService {
    /// Spawns an actor owning `restaurant`. Must be called inside a Tokio runtime.
    ///
    /// # Panics
    /// If `buffer_size` is 0 (Tokio rejects zero-capacity channels).
    pub fn new(restaurant: Restaurant, buffer_size: usize) -> Self {
        info!(name = restaurant.name(), menu_size = restaurant.menu().len(), "Starting restaurant service");
        let (actor, client) = crate::restaurant_actor::new(restaurant, buffer_size);
        let handle = tokio::spawn(actor.run());

        Self { client, handle }
    }

    /// Builds the restaurant from `config` and spawns its actor.
    pub fn from_config(config: &RestaurantConfig) -> Result<Self, RestaurantError> {
        config.validate()?;
        Ok(Self::new(config.build_restaurant(), config.buffer_size))
    }

    /// Gracefully shuts down the service and returns the restaurant's final state.
    ///
    /// # Shutdown Process
    ///
    /// Dropping the service's client closes the channel once every clone of it is
    /// gone too. The actor then leaves its loop and hands the restaurant back.
    /// Clones still held elsewhere keep the actor alive, so this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(Restaurant)` if the actor shut down cleanly
    /// - `Err(RestaurantError::ActorTaskFailed)` if the actor task panicked
    pub async fn shutdown(self) -> Result<Restaurant, RestaurantError> {
        info!("Shutting down restaurant service...");

        drop(self.client);

        match self.handle.await {
            Ok(restaurant) => {
                info!(menu_size = restaurant.menu().len(), "Restaurant service shutdown complete.");
                Ok(restaurant)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(RestaurantError::ActorTaskFailed(e.to_string()))
            }
        }
    }
}
