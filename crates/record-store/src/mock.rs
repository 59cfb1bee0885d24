//! # Mock Store & Testing Guide
//!
//! `MockStore<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a queue of
//! scripted expectations instead of a running [`StoreActor`](crate::StoreActor). Code that
//! depends on a store client (repositories, services) can be unit tested deterministically,
//! including failures that a real store never produces on demand.
//!
//! ## When to use Mocks vs the Real Store
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | None (scripted answers) | Real table with ids and unique keys |
//! | **Determinism** | Fully scripted | Subject to request order |
//! | **Error Injection** | Easy (`return_err`) | Only the errors the table produces |
//! | **Use Case** | Logic *around* the client | End-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{StoreError, StoredEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: Option<u64> }
//!
//! impl StoredEntity for Note {
//!     type Id = u64;
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn with_id(self, id: u64) -> Self { Self { id: Some(id) } }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_find_by_id(1).return_ok(Some(Note { id: Some(1) }));
//!     mock.expect_find_all().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.find_by_id(1).await.unwrap().is_some());
//!     assert!(matches!(client.find_all().await, Err(StoreError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed strictly in the order they were declared. A request that does not
//! match the next expectation panics inside the mock task, which drops the reply channel and
//! surfaces to the caller as [`StoreError::ActorDropped`].
//!
//! ## Low-level Helpers
//!
//! [`create_mock_client`] returns a client together with the raw request receiver, for tests that
//! need to inspect the exact payload sent (see [`expect_save`], [`expect_find_by_key`]).

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request together with the answer to give it.
enum Expectation<T: StoredEntity> {
    Save {
        response: Result<T, StoreError>,
    },
    FindById {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    FindByKey {
        key: String,
        response: Result<Option<T>, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    FindAll {
        response: Result<Vec<T>, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted store with expectation tracking for fluent testing.
pub struct MockStore<T: StoredEntity> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockStore<T> {
    /// Creates a new mock store with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (StoreRequest::Save { respond_to, .. }, Some(Expectation::Save { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::FindById {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "FindById called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindByKey { key, respond_to },
                        Some(Expectation::FindByKey {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "FindByKey called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::FindAll { respond_to }, Some(Expectation::FindAll { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `save` request.
    pub fn expect_save(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Save { response })
    }

    /// Expects a `find_by_id` request for `id`.
    pub fn expect_find_by_id(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::FindById { id, response })
    }

    /// Expects a `find_by_key` request for the normalized `key`.
    pub fn expect_find_by_key(&mut self, key: impl Into<String>) -> ExpectationBuilder<T, Option<T>> {
        let key = key.into();
        self.builder(move |response| Expectation::FindByKey { key, response })
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects a `find_all` request.
    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::FindAll { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that records the answer for one expectation.
pub struct ExpectationBuilder<T: StoredEntity, R> {
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
    expectations: Expectations<T>,
}

impl<T: StoredEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the part of the store: it receives each request, asserts on its payload, and
/// answers through the request's reply channel.
pub fn create_mock_client<T: StoredEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request.
pub async fn expect_save<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindByKey request.
pub async fn expect_find_by_key<T: StoredEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(String, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::FindByKey { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: Option<u64>,
        title: String,
    }

    impl StoredEntity for Note {
        type Id = u64;

        fn id(&self) -> Option<u64> {
            self.id
        }

        fn with_id(self, id: u64) -> Self {
            Self {
                id: Some(id),
                ..self
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let save_task = tokio::spawn(async move {
            client
                .save(Note {
                    id: None,
                    title: "Draft".to_string(),
                })
                .await
        });

        let (record, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(record.title, "Draft");
        assert!(record.id.is_none());
        responder.send(Ok(record.with_id(7))).unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, Some(7));
    }

    #[tokio::test]
    async fn test_find_by_key_helper_hands_back_the_reply_channel() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let lookup = tokio::spawn(async move { client.find_by_key("groceries").await });

        let (key, responder): (String, Response<Option<Note>>) =
            expect_find_by_key(&mut receiver)
                .await
                .expect("Expected FindByKey request");
        assert_eq!(key, "groceries");
        responder
            .send(Err(StoreError::UniqueViolation(key)))
            .unwrap();

        assert_eq!(
            lookup.await.unwrap(),
            Err(StoreError::UniqueViolation("groceries".to_string()))
        );
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Note>::new();
        let note = Note {
            id: Some(1),
            title: "Groceries".to_string(),
        };

        mock.expect_find_by_key("groceries").return_ok(None);
        mock.expect_save().return_ok(note.clone());
        mock.expect_delete(1).return_err(StoreError::NotFound("1".to_string()));

        let client = mock.client();
        assert!(client.find_by_key("groceries").await.unwrap().is_none());
        assert_eq!(
            client
                .save(Note {
                    id: None,
                    title: "Groceries".to_string()
                })
                .await
                .unwrap(),
            note
        );
        assert_eq!(
            client.delete(1).await,
            Err(StoreError::NotFound("1".to_string()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockStore::<Note>::new();
        mock.expect_find_all().return_ok(vec![]);

        let result = mock.client().delete(3).await;
        assert_eq!(result, Err(StoreError::ActorDropped));
    }
}
