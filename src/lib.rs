//! # Restaurant
//!
//! > **A restaurant entity with a menu, opening hours and order totals.**
//!
//! The core is the synchronous [`Restaurant`](model::Restaurant): it keeps its menu in
//! insertion order, tells whether it is open against an injected [`Clock`](clock::Clock)
//! and sums the price of a selection of menu items. When a restaurant has to be shared
//! between tasks, it is handed to an actor that owns it and runs every request in turn.
//!
//! ## 🏗️ Design
//!
//! ### Time is injected
//! `Restaurant::is_restaurant_open` asks the restaurant's clock for the current time.
//! The default is the system clock; tests pass a [`FixedClock`](clock::FixedClock),
//! a [`ManualClock`](clock::ManualClock) or a closure.
//!
//! ### One error type
//! [`RestaurantError`](restaurant_actor::RestaurantError) covers the domain failure
//! (`ItemNotFound`) and the actor plumbing (`Actor`), so the synchronous API and the
//! async client return the same type.
//!
//! ### Concurrency Model
//! An [`EntityActor`](framework::EntityActor) runs in its own Tokio task and processes
//! messages sequentially. No lock guards the menu; ordering comes from the channel.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: [`Restaurant`](model::Restaurant) and [`Item`](model::Item).
//! - [`clock`]: time sources.
//! - [`framework`]: the generic single-entity actor, its client and test mocks.
//! - [`restaurant_actor`]: restaurant actions, errors and the actor factory.
//! - [`clients`]: [`RestaurantClient`](clients::RestaurantClient), the async API.
//! - [`lifecycle`]: [`RestaurantService`](lifecycle::RestaurantService) and tracing setup.
//! - [`config`]: [`RestaurantConfig`](config::RestaurantConfig), loaded from JSON.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use restaurant::model::Restaurant;
//!
//! let mut cafe = Restaurant::new(
//!     "Amelie's cafe",
//!     "Chennai",
//!     "10:30:00".parse().unwrap(),
//!     "22:00:00".parse().unwrap(),
//! );
//! cafe.add_to_menu("Sweet corn soup", 119);
//! cafe.add_to_menu("Vegetable lasagne", 269);
//!
//! let order = vec!["Sweet corn soup".to_string()];
//! assert_eq!(cafe.calculate_total_order_value(Some(order.as_slice())), 119);
//! assert!(cafe.remove_from_menu("French fries").is_err());
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RESTAURANT_CONFIG=cafe.json cargo run
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod restaurant_actor;
