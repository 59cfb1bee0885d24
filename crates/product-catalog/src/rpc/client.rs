//! # Product Service Client
//!
//! The typed stub callers use to reach an [`RpcServer`](super::RpcServer).

use super::server::RpcCall;
use super::wire::{
    EmptyRequest, EmptyResponse, ProductRequest, ProductResponse, ProductResponseList,
    RequestById,
};
use tokio::sync::{mpsc, oneshot};
use tonic::Status;

/// Client for the `ProductService` RPC surface.
///
/// Cheap to clone; every clone talks to the same server. Besides the statuses the server
/// answers with, a call fails with `UNAVAILABLE` when the server is gone and with `CANCELLED`
/// when the server dropped the call without replying.
#[derive(Clone, Debug)]
pub struct ProductServiceClient {
    sender: mpsc::Sender<RpcCall>,
}

impl ProductServiceClient {
    pub fn new(sender: mpsc::Sender<RpcCall>) -> Self {
        Self { sender }
    }
}

/// Generates one `async fn` per unary call, named after the `RpcCall` variant in snake case.
macro_rules! unary_calls {
    ($($(#[$doc:meta])* $variant:ident($request:ty) -> $response:ty;)*) => {
        paste::paste! {
            impl ProductServiceClient {
                $(
                    $(#[$doc])*
                    #[tracing::instrument(skip(self))]
                    pub async fn [<$variant:snake>](&self, request: $request) -> Result<$response, Status> {
                        tracing::debug!("Sending request");
                        let (respond_to, response) = oneshot::channel();
                        self.sender
                            .send(RpcCall::$variant { request, respond_to })
                            .await
                            .map_err(|_| Status::unavailable("RPC server closed"))?;
                        response
                            .await
                            .map_err(|_| Status::cancelled("RPC call dropped before a reply"))?
                    }
                )*
            }
        }
    };
}

unary_calls! {
    /// Creates a product. Fails with `ALREADY_EXISTS` if the name is taken, ignoring case.
    Create(ProductRequest) -> ProductResponse;
    /// Fetches a product. Fails with `NOT_FOUND` for an unknown id.
    FindById(RequestById) -> ProductResponse;
    /// Deletes a product. Fails with `NOT_FOUND` for an unknown id.
    Delete(RequestById) -> EmptyResponse;
    /// Lists every product.
    FindAll(EmptyRequest) -> ProductResponseList;
}
