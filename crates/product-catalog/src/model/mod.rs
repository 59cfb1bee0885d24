//! Pure data structures: the [`Product`] record and its input/output DTOs.

pub mod product;

pub use product::*;
