//! # Store Messages
//!
//! This module defines the request type carried from a [`StoreClient`](crate::StoreClient)
//! to the [`StoreActor`](crate::StoreActor).

use crate::entity::StoredEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
///
/// Each variant maps to one repository operation:
///
/// - **Save**: Persists a new record and answers with the record carrying its assigned id.
/// - **FindById**: Looks a record up by identifier.
/// - **FindByKey**: Looks a record up by its normalized unique key.
/// - **Delete**: Removes a record by identifier.
/// - **FindAll**: Answers every record in identifier order.
#[derive(Debug)]
pub enum StoreRequest<T: StoredEntity> {
    Save {
        record: T,
        respond_to: Response<T>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindByKey {
        key: String,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
}
