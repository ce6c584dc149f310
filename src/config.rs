//! # Restaurant Configuration
//!
//! [`RestaurantConfig`] describes a restaurant to start: identity, hours, the initial
//! menu and the actor's channel size. Times use the `HH:MM:SS` form.
//!
//! ```json
//! {
//!   "name": "Amelie's cafe",
//!   "location": "Chennai",
//!   "opening_time": "10:30:00",
//!   "closing_time": "22:00:00",
//!   "menu": [{ "name": "Sweet corn soup", "price": 119 }]
//! }
//! ```

use crate::model::{Item, Restaurant};
use crate::restaurant_actor::{RestaurantError, DEFAULT_BUFFER_SIZE};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default)]
    pub menu: Vec<Item>,
    /// Capacity of the actor's request channel.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl RestaurantConfig {
    /// Parses a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, RestaurantError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RestaurantError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RestaurantError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| RestaurantError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), RestaurantError> {
        if self.buffer_size == 0 {
            return Err(RestaurantError::Config("buffer_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Builds the restaurant with the configured menu, on the system clock.
    pub fn build_restaurant(&self) -> Restaurant {
        let mut restaurant = Restaurant::new(
            self.name.clone(),
            self.location.clone(),
            self.opening_time,
            self.closing_time,
        );
        for item in &self.menu {
            restaurant.add_to_menu(item.name.clone(), item.price);
        }
        restaurant
    }
}
