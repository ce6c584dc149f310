//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without a real entity behind the actor.
//!
//! Use [`MockClient`] to queue expected requests and canned responses, or
//! [`create_mock_client`] plus [`expect_action`] to inspect raw requests yourself.

use crate::framework::{ActorEntity, EntityClient, EntityRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request to the mock client and the response to give it.
enum Expectation<T: ActorEntity> {
    Snapshot {
        response: Result<T, T::Error>,
    },
    Action {
        response: Result<T::ActionResult, T::Error>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Restaurant>::new();
/// mock.expect_action().return_ok(RestaurantActionResult::IsOpen(true));
///
/// let client = RestaurantClient::new(mock.client());
/// assert!(client.is_restaurant_open().await?);
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: EntityClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    received: Arc<Mutex<Vec<T::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<EntityRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (EntityRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (EntityRequest::Action { action, respond_to }, Some(Expectation::Action { response })) => {
                        received_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: EntityClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> EntityClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Takes the actions received so far, in arrival order.
    pub fn take_received(&self) -> Vec<T::Action> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, entity: T) {
        self.push(Ok(entity));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: T::Error) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot { response });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: T::Error) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action { response });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// When testing *client* logic we don't want a real actor. The test owns the
/// receiving end instead, inspects each request and answers it, which makes
/// success, failure and mismatched responses deterministic.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (EntityClient<T>, mpsc::Receiver<EntityRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (EntityClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<EntityRequest<T>>,
) -> Option<(T::Action, oneshot::Sender<Result<T::ActionResult, T::Error>>)> {
    match receiver.recv().await {
        Some(EntityRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Restaurant};
    use crate::restaurant_actor::{RestaurantAction, RestaurantActionResult, RestaurantError};

    fn empty_restaurant() -> Restaurant {
        Restaurant::new(
            "Amelie's cafe",
            "Chennai",
            "10:30:00".parse().unwrap(),
            "22:00:00".parse().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Restaurant>(10);

        let task = tokio::spawn(async move { client.perform_action(RestaurantAction::GetMenu).await });

        let (action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert!(matches!(action, RestaurantAction::GetMenu));
        responder
            .send(Ok(RestaurantActionResult::GetMenu(vec![Item::new("Sweet corn soup", 119)])))
            .unwrap();

        let result = task.await.unwrap().unwrap();
        assert!(matches!(result, RestaurantActionResult::GetMenu(items) if items.len() == 1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Restaurant>::new();

        mock.expect_snapshot().return_ok(empty_restaurant());
        mock.expect_action()
            .return_err(RestaurantError::ItemNotFound("French fries".to_string()));

        let client = mock.client();

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.name(), "Amelie's cafe");

        let result = client
            .perform_action(RestaurantAction::RemoveFromMenu { name: "French fries".to_string() })
            .await;
        assert!(matches!(result, Err(RestaurantError::ItemNotFound(name)) if name == "French fries"));

        let received = mock.take_received();
        assert_eq!(received.len(), 1);
        mock.verify();
    }
}
