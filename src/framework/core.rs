//! # Core Actor Framework
//!
//! This module defines the generic building blocks for sharing one stateful entity
//! between tasks.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait an entity implements to be owned by an actor.
//! - [`EntityActor`]: The generic actor that owns the entity.
//! - [`EntityClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Channel failures (ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that an entity must implement to be owned by an [`EntityActor`].
///
/// # Architecture Note
/// The actor loop is written once against this contract. An entity only describes
/// *what* its actions do; the actor decides *when* they run, one at a time.
///
/// Associated types keep every operation type-safe: a `Restaurant` actor only accepts
/// a `RestaurantAction` and only answers with a `RestaurantActionResult`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Enum of the operations the entity supports (e.g., `AddToMenu`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The entity's own error type. Channel failures must convert into it so that
    /// clients see a single error type.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Handle one action against the entity's state.
    async fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Short size figure reported in lifecycle logs. Defaults to 0.
    fn size(&self) -> usize {
        0
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Internal message type sent to the actor.
///
/// - **Snapshot**: Read. Returns a clone of the entity's current state.
/// - **Action**: Executes an [`ActorEntity::Action`], possibly mutating the entity.
#[derive(Debug)]
pub enum EntityRequest<T: ActorEntity> {
    Snapshot {
        respond_to: Response<T, T::Error>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single entity.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so every mutation is
/// serialized without a `Mutex` around the entity. Any number of cloned clients can
/// talk to it concurrently.
pub struct EntityActor<T: ActorEntity> {
    receiver: mpsc::Receiver<EntityRequest<T>>,
    entity: T,
}

impl<T: ActorEntity> EntityActor<T> {
    pub fn new(buffer_size: usize, entity: T) -> (Self, EntityClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        let client = EntityClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped, then hands
    /// the entity back.
    pub async fn run(mut self) -> T {
        // Extract just the type name (e.g., "Restaurant" instead of "restaurant::model::restaurant::Restaurant")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.entity.size(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                EntityRequest::Snapshot { respond_to } => {
                    debug!(entity_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.entity.clone()));
                }
                EntityRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    let result = self.entity.handle_action(action).await;
                    match &result {
                        Ok(_) => info!(entity_type, size = self.entity.size(), "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.entity.size(), "Shutdown");
        self.entity
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with an [`EntityActor`].
pub struct EntityClient<T: ActorEntity> {
    sender: mpsc::Sender<EntityRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` on the sender, which is not needed.
impl<T: ActorEntity> Clone for EntityClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> EntityClient<T> {
    pub fn new(sender: mpsc::Sender<EntityRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn snapshot(&self) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(EntityRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
