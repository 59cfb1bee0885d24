//! # Product Resource
//!
//! The adapter between the RPC surface and the [`ProductService`]. Each handler decodes its wire
//! request, calls the service, and encodes the result. It is also the only place where a
//! [`ProductError`] becomes a [`Status`]:
//!
//! | Service error | Status |
//! |---------------|--------|
//! | `AlreadyExists` | `ALREADY_EXISTS`, `Produto <name> já cadastrado.` |
//! | `NotFound` | `NOT_FOUND`, `Produto com ID <id> não encontrado.` |
//! | `Repository` | `INTERNAL`, generic message (cause is logged) |

use super::wire::{
    EmptyRequest, EmptyResponse, ProductRequest, ProductResponse, ProductResponseList,
    RequestById,
};
use crate::model::{ProductId, ProductInput, ProductOutput};
use crate::repository::ProductRepository;
use crate::service::{ProductError, ProductService};
use rust_decimal::Decimal;
use tonic::Status;
use tracing::{error, instrument};

/// RPC handlers for the product catalog.
pub struct ProductResource<R: ProductRepository> {
    service: ProductService<R>,
}

impl<R: ProductRepository> ProductResource<R> {
    pub fn new(service: ProductService<R>) -> Self {
        Self { service }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: ProductRequest) -> Result<ProductResponse, Status> {
        let input = decode_product_request(request)?;
        let output = self.service.create(input).await?;
        Ok(encode_product(output))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, request: RequestById) -> Result<ProductResponse, Status> {
        let output = self.service.find_by_id(ProductId(request.id)).await?;
        Ok(encode_product(output))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, request: RequestById) -> Result<EmptyResponse, Status> {
        self.service.delete(ProductId(request.id)).await?;
        Ok(EmptyResponse {})
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self, _request: EmptyRequest) -> Result<ProductResponseList, Status> {
        let products = self
            .service
            .find_all()
            .await?
            .into_iter()
            .map(encode_product)
            .collect();
        Ok(ProductResponseList { products })
    }
}

impl From<ProductError> for Status {
    fn from(e: ProductError) -> Self {
        match &e {
            ProductError::AlreadyExists(_) => Status::already_exists(e.to_string()),
            ProductError::NotFound(_) => Status::not_found(e.to_string()),
            ProductError::Repository(cause) => {
                error!(error = %cause, "Product repository failed");
                Status::internal("Erro interno do servidor.")
            }
        }
    }
}

/// Rejects requests that cannot describe a product at all: an empty name or a negative price.
/// Business rules stay in the service.
fn decode_product_request(request: ProductRequest) -> Result<ProductInput, Status> {
    if request.name.is_empty() {
        return Err(Status::invalid_argument("O nome do produto é obrigatório."));
    }
    if request.price < Decimal::ZERO {
        return Err(Status::invalid_argument(
            "O preço do produto não pode ser negativo.",
        ));
    }

    Ok(ProductInput {
        name: request.name,
        price: request.price,
        quantity_in_stock: request.quantity_in_stock,
    })
}

fn encode_product(output: ProductOutput) -> ProductResponse {
    ProductResponse {
        id: output.id.map(|id| id.0).unwrap_or_default(),
        name: output.name,
        price: output.price,
        quantity_in_stock: output.quantity_in_stock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::repository::{RepositoryError, StoreProductRepository};
    use record_store::mock::MockStore;
    use record_store::StoreError;
    use tonic::Code;

    fn resource(mock: &MockStore<Product>) -> ProductResource<StoreProductRepository> {
        ProductResource::new(ProductService::new(StoreProductRepository::new(
            mock.client(),
        )))
    }

    #[test]
    fn test_business_errors_map_to_fixed_messages() {
        let status = Status::from(ProductError::AlreadyExists("Product A".to_string()));
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(status.message(), "Produto Product A já cadastrado.");

        let status = Status::from(ProductError::NotFound(ProductId(100)));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "Produto com ID 100 não encontrado.");
    }

    #[test]
    fn test_repository_errors_map_to_internal() {
        let status = Status::from(ProductError::Repository(RepositoryError::Unavailable(
            "Store actor closed".to_string(),
        )));
        assert_eq!(status.code(), Code::Internal);
        assert!(!status.message().contains("Store actor closed"));
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_the_service() {
        // No expectations: reaching the store would panic the mock.
        let mock = MockStore::<Product>::new();

        let result = resource(&mock)
            .create(ProductRequest {
                name: String::new(),
                price: Decimal::new(1099, 2),
                quantity_in_stock: 10,
            })
            .await;

        assert_eq!(result.unwrap_err().code(), Code::InvalidArgument);
        mock.verify();
    }

    #[tokio::test]
    async fn test_whitespace_name_reaches_the_service() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_key("  ").return_ok(None);
        mock.expect_save().return_ok(Product::new(
            Some(ProductId(1)),
            "  ",
            Decimal::new(1099, 2),
            10,
        ));

        let response = resource(&mock)
            .create(ProductRequest {
                name: "  ".to_string(),
                price: Decimal::new(1099, 2),
                quantity_in_stock: 10,
            })
            .await
            .unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "  ");
        mock.verify();
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected_before_the_service() {
        let mock = MockStore::<Product>::new();

        let result = resource(&mock)
            .create(ProductRequest {
                name: "Product A".to_string(),
                price: Decimal::new(-1, 2),
                quantity_in_stock: 10,
            })
            .await;

        assert_eq!(result.unwrap_err().code(), Code::InvalidArgument);
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_all_wraps_empty_list() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_all().return_ok(vec![]);

        let response = resource(&mock).find_all(EmptyRequest {}).await.unwrap();

        assert!(response.products.is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_internal() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_id(ProductId(1))
            .return_err(StoreError::ActorDropped);

        let status = resource(&mock)
            .find_by_id(RequestById { id: 1 })
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        mock.verify();
    }
}
