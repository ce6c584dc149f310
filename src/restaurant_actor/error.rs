//! Error types for the Restaurant actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// No menu item has the requested name.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The actor could not be reached or did not answer.
    #[error("Actor communication error: {0}")]
    Actor(#[from] FrameworkError),

    /// The actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),

    /// The restaurant configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The actor answered with a result that does not match the request.
    #[error("Unexpected actor response: {0}")]
    UnexpectedResponse(String),
}
