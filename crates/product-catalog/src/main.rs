//! Runs the catalog and walks one product through its whole life over the RPC client.

use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::rpc::{EmptyRequest, ProductRequest, RequestById};
use record_store::tracing::setup_tracing;
use rust_decimal::Decimal;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = CatalogSystem::new(CatalogConfig::from_env());
    let client = system.client.clone();

    let created = client
        .create(ProductRequest {
            name: "Product A".to_string(),
            price: Decimal::new(1099, 2),
            quantity_in_stock: 10,
        })
        .instrument(tracing::info_span!("create"))
        .await
        .map_err(|status| status.message().to_string())?;
    info!(id = created.id, name = %created.name, "Product created");

    // Same name, different casing.
    match client
        .create(ProductRequest {
            name: "product a".to_string(),
            price: Decimal::new(500, 2),
            quantity_in_stock: 1,
        })
        .instrument(tracing::info_span!("create_duplicate"))
        .await
    {
        Ok(response) => warn!(id = response.id, "Duplicate name was accepted"),
        Err(status) => info!(
            code = ?status.code(),
            message = status.message(),
            "Duplicate rejected"
        ),
    }

    let fetched = client
        .find_by_id(RequestById { id: created.id })
        .await
        .map_err(|status| status.message().to_string())?;
    info!(?fetched, "Product fetched");

    client
        .delete(RequestById { id: created.id })
        .instrument(tracing::info_span!("delete"))
        .await
        .map_err(|status| status.message().to_string())?;

    if let Err(status) = client.find_by_id(RequestById { id: created.id }).await {
        info!(
            code = ?status.code(),
            message = status.message(),
            "Lookup after delete"
        );
    }

    let listed = client
        .find_all(EmptyRequest {})
        .await
        .map_err(|status| status.message().to_string())?;
    info!(count = listed.products.len(), "Products remaining");

    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
