//! # StoredEntity Trait
//!
//! The `StoredEntity` trait is the contract a record type must satisfy to be persisted by the
//! generic [`StoreActor`](crate::StoreActor). It names the identifier type, exposes the
//! identifier (absent until the first save), lets the store stamp a freshly assigned identifier
//! onto a new record, and optionally declares a unique key the store must keep distinct.
//!
//! # Architecture Note
//! The store logic (id assignment, ordering, uniqueness, removal) is written *once* against this
//! trait and reused for any record type. Associated types keep it type-safe: a store of
//! `Product` records answers with `Product`, keyed by `ProductId`, and nothing else.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a [`StoreActor`](crate::StoreActor).
pub trait StoredEntity: Clone + Send + Sync + Debug + 'static {
    /// The unique identifier for this record.
    /// Must be constructible from `u64` so the store can generate identifiers, and ordered
    /// so `FindAll` can answer in identifier order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The identifier, or `None` for a record that has never been saved.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the record carrying the identifier the store assigned to it.
    fn with_id(self, id: Self::Id) -> Self;

    /// A key that must be unique across all stored records, already normalized
    /// (e.g. case-folded) by the implementor.
    ///
    /// The default implementation declares no unique key.
    fn unique_key(&self) -> Option<String> {
        None
    }
}
