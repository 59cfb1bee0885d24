use crate::config::CatalogConfig;
use crate::model::Product;
use crate::repository::StoreProductRepository;
use crate::rpc::{ProductResource, ProductServiceClient, RpcServer};
use crate::service::ProductService;
use record_store::StoreActor;
use tracing::{error, info};

/// The running product catalog: a product store, the service on top of it, and the RPC server
/// in front.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(CatalogConfig::from_env());
///
/// let created = system.client.create(request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for the RPC server
    pub client: ProductServiceClient,

    server_handle: tokio::task::JoinHandle<()>,
    store_handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Starts the store and the RPC server. Must be called from within a Tokio runtime.
    pub fn new(config: CatalogConfig) -> Self {
        info!(?config, "Starting catalog");

        let (store, store_client) = StoreActor::<Product>::new(config.store_buffer);
        let store_handle = tokio::spawn(store.run());

        let service = ProductService::new(StoreProductRepository::new(store_client));
        let (server, client) = RpcServer::new(ProductResource::new(service), config.rpc_buffer);
        let server_handle = tokio::spawn(server.run());

        Self {
            client,
            server_handle,
            store_handle,
        }
    }

    /// Gracefully shuts down the server, then the store.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both tasks finished cleanly
    /// - `Err(String)` naming the first task that panicked; both tasks are awaited either way
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        // Closing the call channel lets the server drain and release the store client.
        drop(self.client);

        let mut first_failure = None;
        for (name, handle) in [("rpc server", self.server_handle), ("store", self.store_handle)] {
            if let Err(e) = handle.await {
                error!(task = name, "Task failed: {:?}", e);
                first_failure.get_or_insert_with(|| format!("{name} task failed: {e:?}"));
            }
        }

        match first_failure {
            Some(failure) => Err(failure),
            None => {
                info!("Catalog shutdown complete.");
                Ok(())
            }
        }
    }
}
