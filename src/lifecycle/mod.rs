//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`RestaurantService`] - Spawns the restaurant actor and shuts it down cleanly
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod restaurant_service;
pub mod tracing;

pub use restaurant_service::*;
pub use self::tracing::*;
