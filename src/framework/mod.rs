//! Generic actor framework for sharing a single entity between tasks.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait an entity implements to be owned by an actor
//! - [`EntityActor`] - Generic actor that owns the entity and runs its actions one at a time
//! - [`EntityClient`] - Cloneable handle that sends requests to the actor
//! - [`FrameworkError`] - Channel errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning a real actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
