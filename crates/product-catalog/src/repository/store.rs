//! [`ProductRepository`] backed by a [`StoreClient<Product>`].

use super::{ProductRepository, RepositoryError};
use crate::model::{Product, ProductId};
use async_trait::async_trait;
use record_store::{StoreClient, StoreError};
use tracing::{debug, instrument};

/// Repository that forwards every operation to a product store actor.
#[derive(Clone)]
pub struct StoreProductRepository {
    inner: StoreClient<Product>,
}

impl StoreProductRepository {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    fn map_error(e: StoreError) -> RepositoryError {
        match e {
            StoreError::UniqueViolation(key) => RepositoryError::Duplicate(key),
            StoreError::NotFound(id) => RepositoryError::Missing(id),
            other => RepositoryError::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    #[instrument(skip(self))]
    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        debug!("Sending request");
        self.inner.save(product).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        debug!("Sending request");
        self.inner.find_by_id(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_by_name_ignore_case(
        &self,
        name: &str,
    ) -> Result<Option<Product>, RepositoryError> {
        debug!("Sending request");
        self.inner
            .find_by_key(Product::name_key(name))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, product), fields(id = ?product.id))]
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError> {
        debug!("Sending request");
        let id = product.id.ok_or(RepositoryError::Unsaved)?;
        self.inner.delete(id).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        debug!("Sending request");
        self.inner.find_all().await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_store::mock::{create_mock_client, expect_find_by_key, MockStore};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_name_lookup_uses_folded_key() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let repository = StoreProductRepository::new(client);

        let lookup =
            tokio::spawn(async move { repository.find_by_name_ignore_case("Product A").await });

        let (key, responder) = expect_find_by_key(&mut receiver)
            .await
            .expect("Expected FindByKey request");
        assert_eq!(key, "product a");
        responder.send(Ok(None)).unwrap();

        assert_eq!(lookup.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_store_errors_are_mapped() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_save()
            .return_err(StoreError::UniqueViolation("product a".to_string()));
        mock.expect_delete(ProductId(9))
            .return_err(StoreError::NotFound("9".to_string()));
        mock.expect_find_all().return_err(StoreError::ActorClosed);

        let repository = StoreProductRepository::new(mock.client());
        let product = Product::new(None, "Product A", Decimal::new(1099, 2), 10);
        let stale = Product::new(Some(ProductId(9)), "Product A", Decimal::new(1099, 2), 10);

        assert_eq!(
            repository.save(product).await,
            Err(RepositoryError::Duplicate("product a".to_string()))
        );
        assert_eq!(
            repository.delete(&stale).await,
            Err(RepositoryError::Missing("9".to_string()))
        );
        assert!(matches!(
            repository.find_all().await,
            Err(RepositoryError::Unavailable(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_delete_unsaved_product_is_rejected() {
        let mock = MockStore::<Product>::new();
        let repository = StoreProductRepository::new(mock.client());
        let product = Product::new(None, "Product A", Decimal::new(1099, 2), 10);

        assert_eq!(
            repository.delete(&product).await,
            Err(RepositoryError::Unsaved)
        );
        mock.verify();
    }
}
