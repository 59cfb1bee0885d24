//! # Product Service
//!
//! The service owns the catalog's business rules:
//!
//! - **create** rejects a name that already exists, ignoring case.
//! - **find_by_id** and **delete** reject an id with no product behind it.
//!
//! It holds nothing but its [`ProductRepository`], so one instance can serve any number of
//! concurrent calls.
//!
//! ## Usage
//!
//! ```rust
//! use product_catalog::model::ProductInput;
//! use product_catalog::repository::StoreProductRepository;
//! use product_catalog::service::ProductService;
//! use record_store::StoreActor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = StoreActor::new(32);
//!     tokio::spawn(actor.run());
//!     let service = ProductService::new(StoreProductRepository::new(client));
//!
//!     let created = service
//!         .create(ProductInput {
//!             name: "Widget".to_string(),
//!             price: Decimal::new(2999, 2),
//!             quantity_in_stock: 100,
//!         })
//!         .await?;
//!     assert!(created.id.is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Known Gap
//!
//! The duplicate check and the insert are two repository calls. Two concurrent creates with the
//! same name can both pass the check; the record store's unique key then rejects the second
//! save, which is reported as the same [`ProductError::AlreadyExists`]. A repository without
//! such a constraint leaves the race open.

pub mod error;

pub use error::*;

use crate::converter;
use crate::model::{ProductId, ProductInput, ProductOutput};
use crate::repository::{ProductRepository, RepositoryError};
use tracing::{debug, info, instrument};

/// Business operations over the product catalog.
pub struct ProductService<R: ProductRepository> {
    repository: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, input: ProductInput) -> Result<ProductOutput, ProductError> {
        self.check_duplicity(&input.name).await?;

        let name = input.name.clone();
        let product = converter::to_entity(input);
        let created = self.repository.save(product).await.map_err(|e| match e {
            RepositoryError::Duplicate(_) => ProductError::AlreadyExists(name),
            other => other.into(),
        })?;

        info!(id = ?created.id, "Product created");
        Ok(converter::to_output(created))
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ProductId) -> Result<ProductOutput, ProductError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        Ok(converter::to_output(product))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        // The row can vanish between the lookup and the removal.
        self.repository.delete(&product).await.map_err(|e| match e {
            RepositoryError::Missing(_) => ProductError::NotFound(id),
            other => other.into(),
        })?;

        info!(%id, "Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<ProductOutput>, ProductError> {
        let products = self.repository.find_all().await?;
        debug!(count = products.len(), "Products listed");

        Ok(products.into_iter().map(converter::to_output).collect())
    }

    async fn check_duplicity(&self, name: &str) -> Result<(), ProductError> {
        match self.repository.find_by_name_ignore_case(name).await? {
            Some(existing) => {
                debug!(id = ?existing.id, "Name already taken");
                Err(ProductError::AlreadyExists(name.to_string()))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::repository::StoreProductRepository;
    use record_store::mock::MockStore;
    use record_store::StoreError;
    use rust_decimal::Decimal;

    fn product(id: u64, name: &str, price: Decimal, quantity: u32) -> Product {
        Product::new(Some(ProductId(id)), name, price, quantity)
    }

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price: Decimal::new(1000, 2),
            quantity_in_stock: 10,
        }
    }

    fn service(mock: &MockStore<Product>) -> ProductService<StoreProductRepository> {
        ProductService::new(StoreProductRepository::new(mock.client()))
    }

    #[tokio::test]
    async fn test_create_returns_saved_product() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_key("product name").return_ok(None);
        mock.expect_save()
            .return_ok(product(1, "product name", Decimal::new(1000, 2), 10));

        let output = service(&mock).create(input("product name")).await.unwrap();

        assert_eq!(output.id, Some(ProductId(1)));
        assert_eq!(output.name, "product name");
        assert_eq!(output.price, Decimal::new(1000, 2));
        assert_eq!(output.quantity_in_stock, 10);
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_with_duplicated_name_does_not_save() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_key("product name")
            .return_ok(Some(product(1, "Product Name", Decimal::new(1000, 2), 10)));

        let result = service(&mock).create(input("PRODUCT NAME")).await;

        assert_eq!(
            result,
            Err(ProductError::AlreadyExists("PRODUCT NAME".to_string()))
        );
        // No save expectation was declared; a save would have panicked the mock.
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_losing_a_race_reports_already_exists() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_key("product name").return_ok(None);
        mock.expect_save()
            .return_err(StoreError::UniqueViolation("product name".to_string()));

        let result = service(&mock).create(input("Product Name")).await;

        assert_eq!(
            result,
            Err(ProductError::AlreadyExists("Product Name".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_id_returns_product() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_id(ProductId(1))
            .return_ok(Some(product(1, "product name", Decimal::new(1000, 2), 10)));

        let output = service(&mock).find_by_id(ProductId(1)).await.unwrap();

        assert_eq!(output.id, Some(ProductId(1)));
        assert_eq!(output.name, "product name");
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_not_found() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_id(ProductId(1)).return_ok(None);

        let result = service(&mock).find_by_id(ProductId(1)).await;

        assert_eq!(result, Err(ProductError::NotFound(ProductId(1))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_removes_existing_product() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_id(ProductId(1))
            .return_ok(Some(product(1, "product name", Decimal::new(1000, 2), 10)));
        mock.expect_delete(ProductId(1)).return_ok(());

        service(&mock).delete(ProductId(1)).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_id(ProductId(1)).return_ok(None);

        let result = service(&mock).delete(ProductId(1)).await;

        assert_eq!(result, Err(ProductError::NotFound(ProductId(1))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_of_vanished_row_is_not_found() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_by_id(ProductId(1))
            .return_ok(Some(product(1, "product name", Decimal::new(1000, 2), 10)));
        mock.expect_delete(ProductId(1))
            .return_err(StoreError::NotFound("1".to_string()));

        let result = service(&mock).delete(ProductId(1)).await;

        assert_eq!(result, Err(ProductError::NotFound(ProductId(1))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_all_keeps_store_order() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_all().return_ok(vec![
            product(1, "product name", Decimal::new(1000, 2), 10),
            product(2, "other product name", Decimal::new(1000, 2), 100),
        ]);

        let outputs = service(&mock).find_all().await.unwrap();

        let fields: Vec<(Option<ProductId>, &str, u32)> = outputs
            .iter()
            .map(|o| (o.id, o.name.as_str(), o.quantity_in_stock))
            .collect();
        assert_eq!(
            fields,
            vec![
                (Some(ProductId(1)), "product name", 10),
                (Some(ProductId(2)), "other product name", 100),
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_is_not_a_business_error() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_find_all().return_err(StoreError::ActorClosed);

        let result = service(&mock).find_all().await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::Unavailable(_)))
        ));
        mock.verify();
    }
}
