//! Type-safe wrappers around [`EntityClient`](crate::framework::EntityClient).

pub mod actor_client;
pub mod restaurant_client;

pub use actor_client::*;
pub use restaurant_client::*;
