//! Restaurant-specific actor logic: actions, errors and the actor factory.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::EntityActor;
use crate::model::Restaurant;

/// Channel capacity used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Creates a new Restaurant actor owning `restaurant`, and its client.
pub fn new(restaurant: Restaurant, buffer_size: usize) -> (EntityActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = EntityActor::new(buffer_size, restaurant);
    let client = RestaurantClient::new(generic_client);

    (actor, client)
}
