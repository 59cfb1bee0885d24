//! # Product Repository
//!
//! [`ProductRepository`] is the persistence port the service depends on. The service never sees
//! a concrete store; [`StoreProductRepository`] adapts the record store to the port, and tests
//! can put a [`MockStore`](record_store::mock::MockStore) client behind the same adapter.

pub mod store;

pub use store::*;

use crate::model::{Product, ProductId};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur in the persistence layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// The store rejected a save because the product name is already taken.
    #[error("Duplicate product name: {0}")]
    Duplicate(String),

    /// The row to remove no longer exists.
    #[error("Product row missing: {0}")]
    Missing(String),

    /// A product without an id was handed to an operation that needs one.
    #[error("Product has not been saved")]
    Unsaved,

    /// The store could not be reached.
    #[error("Product store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence port for [`Product`] records.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it with its assigned id.
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Finds the product whose name equals `name`, ignoring case.
    async fn find_by_name_ignore_case(&self, name: &str)
        -> Result<Option<Product>, RepositoryError>;

    async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;

    /// Every product, in the order the store yields them.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
