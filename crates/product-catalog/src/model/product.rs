/// Represents a product in the catalog.
///
/// # Record Store
/// This struct implements the [`StoredEntity`](record_store::StoredEntity) trait,
/// allowing it to be persisted by a [`StoreActor`](record_store::StoreActor).
/// Its unique key is the case-folded name, which makes names case-insensitively unique.
///
/// The service never hands a `Product` to callers; it answers with a [`ProductOutput`].
use record_store::StoredEntity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Assigned by the store on first save; `None` before that.
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Decimal,
    pub quantity_in_stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, `None` for a product that has not been saved yet
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity_in_stock` - Available stock quantity
    pub fn new(
        id: Option<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        quantity_in_stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity_in_stock,
        }
    }

    /// The normalized form of `name` used for case-insensitive uniqueness and lookups.
    ///
    /// Folds one character at a time through uppercase and back, so names that match ignoring
    /// case share a key. `str::to_lowercase` alone is context-sensitive (final sigma).
    pub fn name_key(name: &str) -> String {
        name.chars()
            .flat_map(char::to_uppercase)
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl StoredEntity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn with_id(self, id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn unique_key(&self) -> Option<String> {
        Some(Self::name_key(&self.name))
    }
}

/// DTO carrying the intent to create a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub quantity_in_stock: u32,
}

/// DTO returned to callers; a field-for-field copy of a [`Product`].
///
/// `id` mirrors the record's id, so it is always set for a product read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOutput {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: Decimal,
    pub quantity_in_stock: u32,
}
