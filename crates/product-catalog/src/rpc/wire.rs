//! Request and response messages of the `ProductService` RPC surface.
//!
//! These are plain serde types so any byte-level transport can frame them. Field names follow
//! the message definitions clients are generated from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: Decimal,
    pub quantity_in_stock: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestById {
    pub id: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyRequest {}

/// A product as seen on the wire. An unset id is encoded as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub price: Decimal,
    pub quantity_in_stock: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductResponseList {
    pub products: Vec<ProductResponse>,
}
