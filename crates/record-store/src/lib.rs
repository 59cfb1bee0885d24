//! # Record Store
//!
//! This crate provides a generic, actor-backed, in-memory record store. One [`StoreActor`] owns
//! the table for one record type and answers requests sent through cloneable [`StoreClient`]s.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`StoredEntity`]) - what a record is: its id type, how an id is stamped
//!    onto a new record, and which key must stay unique.
//! 2. **Runtime Layer** ([`StoreActor`]) - id assignment, ordering, uniqueness, removal.
//! 3. **Interface Layer** ([`StoreClient`]) - type-safe async calls over a channel.
//!
//! ## Guarantees
//!
//! - Ids are assigned from a counter starting at 1 and are never reused, even after a delete.
//! - At most one record holds a given unique key. The check and the insert happen inside a
//!   single request, so two concurrent saves with the same key cannot both succeed.
//! - `find_all` answers in ascending id order, i.e. insertion order.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task and processes requests **sequentially**.
//! - Clients are cheap to clone and can be shared across tasks.
//! - The store stops once every client has been dropped.
//!
//! ## Testing
//!
//! [`mock::MockStore`] hands out a client answered from scripted expectations, for unit tests of
//! code that sits on top of a store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoredEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
