//! # Restaurant Client
//!
//! Provides a high‑level API for interacting with the `Restaurant` actor.
//! It wraps an `EntityClient<Restaurant>` and exposes the same operations as
//! [`Restaurant`] itself, as async calls that are serialized by the actor.
use crate::clients::actor_client::ActorClient;
use crate::framework::EntityClient;
use crate::model::{Item, Restaurant};
use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};
use async_trait::async_trait;
use chrono::NaiveTime;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: EntityClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: EntityClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    fn inner(&self) -> &EntityClient<Restaurant> {
        &self.inner
    }
}

fn unexpected(result: RestaurantActionResult) -> RestaurantError {
    RestaurantError::UnexpectedResponse(format!("{:?}", result))
}

impl RestaurantClient {
    /// Append an item to the menu.
    #[instrument(skip(self))]
    pub async fn add_to_menu(&self, name: &str, price: u32) -> Result<(), RestaurantError> {
        debug!("Sending request");
        let action = RestaurantAction::AddToMenu {
            name: name.to_string(),
            price,
        };
        match self.inner.perform_action(action).await? {
            RestaurantActionResult::AddToMenu(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Remove the first item with this exact name.
    ///
    /// Fails with [`RestaurantError::ItemNotFound`] if the menu has no such item.
    #[instrument(skip(self))]
    pub async fn remove_from_menu(&self, name: &str) -> Result<(), RestaurantError> {
        debug!("Sending request");
        let action = RestaurantAction::RemoveFromMenu {
            name: name.to_string(),
        };
        match self.inner.perform_action(action).await? {
            RestaurantActionResult::RemoveFromMenu(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// A copy of the menu in insertion order.
    #[instrument(skip(self))]
    pub async fn menu(&self) -> Result<Vec<Item>, RestaurantError> {
        match self.inner.perform_action(RestaurantAction::GetMenu).await? {
            RestaurantActionResult::GetMenu(items) => Ok(items),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn is_restaurant_open(&self) -> Result<bool, RestaurantError> {
        match self.inner.perform_action(RestaurantAction::IsOpen).await? {
            RestaurantActionResult::IsOpen(open) => Ok(open),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn current_time(&self) -> Result<NaiveTime, RestaurantError> {
        match self.inner.perform_action(RestaurantAction::CurrentTime).await? {
            RestaurantActionResult::CurrentTime(now) => Ok(now),
            other => Err(unexpected(other)),
        }
    }

    /// Total price of the selected items; `None` totals 0.
    #[instrument(skip(self))]
    pub async fn calculate_total_order_value(
        &self,
        selected: Option<Vec<String>>,
    ) -> Result<u64, RestaurantError> {
        debug!("Sending request");
        let action = RestaurantAction::CalculateTotal { selected };
        match self.inner.perform_action(action).await? {
            RestaurantActionResult::CalculateTotal(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }
}
