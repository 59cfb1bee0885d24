//! # Store Errors
//!
//! This module defines the error type shared by the store actor, its client, and the mock.

/// Errors that can occur within the record store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Unique key already taken: {0}")]
    UniqueViolation(String),
}
