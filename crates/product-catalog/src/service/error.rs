//! Error types for the product service.

use crate::model::ProductId;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Errors that can occur during product operations.
///
/// The display text of the two business variants is the exact message callers receive.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A product with the same name (ignoring case) already exists.
    #[error("Produto {0} já cadastrado.")]
    AlreadyExists(String),

    /// No product has the requested id.
    #[error("Produto com ID {0} não encontrado.")]
    NotFound(ProductId),

    /// The persistence layer failed for a reason that is not a business rule.
    #[error("Product repository error: {0}")]
    Repository(#[from] RepositoryError),
}
