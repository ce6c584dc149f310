use crate::framework::{ActorEntity, EntityClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the operations every actor supports.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic EntityClient.
    fn inner(&self) -> &EntityClient<T>;

    /// Fetch a copy of the entity's current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, T::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await
    }
}
