//! # Store Actor
//!
//! This module defines the `StoreActor`, the server half of the record store. It owns the table
//! of records and processes requests sequentially, so every operation sees a consistent table
//! without any locking.

use crate::client::StoreClient;
use crate::entity::StoredEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a table of records.
///
/// # Concurrency Model
/// Any number of clients may send requests at once, but the actor handles them one at a time in
/// its own task. Read-then-write sequences inside a single request (such as the unique key check
/// in `Save`) are therefore atomic with respect to every other request.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Shut down**: Drop every client; the loop ends once the channel closes.
///
/// ```rust
/// use record_store::{StoreActor, StoredEntity};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: Option<u64>, title: String }
///
/// impl StoredEntity for Note {
///     type Id = u64;
///     fn id(&self) -> Option<u64> { self.id }
///     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let saved = client.save(Note { id: None, title: "hello".into() }).await.unwrap();
///     assert_eq!(saved.id, Some(1));
/// }
/// ```
///
/// # Implementation Details
///
/// * **Save**: assigns the next id from a counter that only grows (ids are never reused),
///   rejects the record if its unique key is held by another record, then inserts it.
/// * **FindById** / **FindByKey**: clone the matching record, if any.
/// * **Delete**: removes the record and releases its unique key; unknown ids are `NotFound`.
/// * **FindAll**: clones every record in ascending id order, which is insertion order.
pub struct StoreActor<T: StoredEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<T::Id, T>,
    keys: HashMap<String, T::Id>,
    next_id: u64,
}

impl<T: StoredEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: BTreeMap::new(),
            keys: HashMap::new(),
            next_id: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "product_catalog::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { record, respond_to } => {
                    debug!(entity_type, ?record, "Save");
                    let _ = respond_to.send(self.save(entity_type, record));
                }
                StoreRequest::FindById { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(entity_type, %id, found = record.is_some(), "FindById");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::FindByKey { key, respond_to } => {
                    let record = self
                        .keys
                        .get(&key)
                        .and_then(|id| self.records.get(id))
                        .cloned();
                    debug!(entity_type, %key, found = record.is_some(), "FindByKey");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    match self.records.remove(&id) {
                        Some(record) => {
                            if let Some(key) = record.unique_key() {
                                self.keys.remove(&key);
                            }
                            info!(entity_type, %id, size = self.records.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        }
                    }
                }
                StoreRequest::FindAll { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "FindAll");
                    let _ = respond_to.send(Ok(self.records.values().cloned().collect()));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }

    fn save(&mut self, entity_type: &str, record: T) -> Result<T, StoreError> {
        let key = record.unique_key();
        if let Some(key) = &key {
            if self.keys.contains_key(key) {
                warn!(entity_type, %key, "Unique key taken");
                return Err(StoreError::UniqueViolation(key.clone()));
            }
        }

        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let record = record.with_id(id.clone());
        if let Some(key) = key {
            self.keys.insert(key, id.clone());
        }
        self.records.insert(id.clone(), record.clone());
        info!(entity_type, %id, size = self.records.len(), "Saved");
        Ok(record)
    }
}
