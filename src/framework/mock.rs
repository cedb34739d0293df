//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_batch`] to assert behavior.
//! For a fluent, scripted alternative, use [`MockClient`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Batch {
        response: Result<Vec<T::ActionResult>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(expectation);
}

fn check_id<T: ActorEntity>(expected: &T::Id, actual: &T::Id) {
    assert_eq!(expected, actual, "mock received a request for an unexpected id");
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered in the order the expectations were registered. A request that
/// does not match the next expectation panics the mock's task, which surfaces in the
/// test as [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<MenuItem>::new();
/// mock.expect_get("latte".into()).return_ok(Some(latte));
/// mock.expect_create().return_ok(mocha);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let pending = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = pending
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        check_id::<T>(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update { id: expected, response })) => {
                        check_id::<T>(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        check_id::<T>(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: expected, response })) => {
                        check_id::<T>(&expected, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Batch { respond_to, .. }, Some(Expectation::Batch { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ResponseBuilder<T, T> {
        ResponseBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ResponseBuilder<T, Vec<T>> {
        ResponseBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ResponseBuilder<T, T> {
        ResponseBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Update { id, response }
        })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ResponseBuilder<T, ()> {
        ResponseBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ResponseBuilder<T, T::ActionResult> {
        ResponseBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Expects a `batch` operation.
    pub fn expect_batch(&mut self) -> ResponseBuilder<T, Vec<T::ActionResult>> {
        ResponseBuilder::new(self.expectations.clone(), |response| Expectation::Batch { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for every other expectation: fixes the response the mock will send back.
pub struct ResponseBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ResponseBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.build)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, (self.build)(Err(error)));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests, we don't want to spin up a full `ResourceActor` if we are just
/// testing the *Client* logic (e.g., `InventoryClient`).
///
/// Instead, we create a "Mock Client". This client sends messages to a channel we control (`receiver`).
/// We can then inspect the messages arriving on that channel and assert they are correct.
/// This allows us to simulate the Actor's behavior (success, failure, delays) deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Batch request
pub async fn expect_batch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<(T::Id, T::Action)>, Responder<Vec<T::ActionResult>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Batch {
            actions,
            respond_to,
        }) => Some((actions, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IngredientId, InventoryItem, InventoryItemCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<InventoryItem>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(InventoryItem::new("milk", "Whole milk", 10.0, "ml").into())
                .await
        });

        let (payload, responder): (InventoryItemCreate, _) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.id, IngredientId::from("milk"));
        responder
            .send(Ok(InventoryItem::new("milk", "Whole milk", 10.0, "ml")))
            .unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.quantity, 10.0);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let milk = InventoryItem::new("milk", "Whole milk", 10.0, "ml");

        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_create().return_ok(milk.clone());
        mock.expect_get("milk".into()).return_ok(Some(milk.clone()));
        mock.expect_list().return_ok(vec![milk.clone()]);

        let client = mock.client();

        let created = client.create(milk.clone().into()).await.unwrap();
        assert_eq!(created, milk);

        let fetched = client.get("milk".into()).await.unwrap();
        assert_eq!(fetched.map(|item| item.name), Some("Whole milk".to_string()));

        assert_eq!(client.list().await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn unexpected_requests_drop_the_response() {
        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_list().return_ok(vec![]);

        let err = mock.client().delete("milk".into()).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorDropped));
    }
}
