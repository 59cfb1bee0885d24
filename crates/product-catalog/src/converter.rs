//! Field-for-field mapping between the [`Product`] record and its DTOs.

use crate::model::{Product, ProductInput, ProductOutput};

/// Copies every field of `product` into an output DTO.
pub fn to_output(product: Product) -> ProductOutput {
    ProductOutput {
        id: product.id,
        name: product.name,
        price: product.price,
        quantity_in_stock: product.quantity_in_stock,
    }
}

/// Builds an unsaved record from an input DTO. No validation happens here.
pub fn to_entity(input: ProductInput) -> Product {
    Product::new(None, input.name, input.price, input.quantity_in_stock)
}
