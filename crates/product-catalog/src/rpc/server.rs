//! # RPC Server
//!
//! The call loop in front of a [`ProductResource`]. Calls arrive as [`RpcCall`] messages on a
//! bounded channel, each carrying its request and a one-shot reply sender. Unlike the record
//! store, calls are independent of each other, so every call is served in its own task.

use super::client::ProductServiceClient;
use super::resource::ProductResource;
use super::wire::{
    EmptyRequest, EmptyResponse, ProductRequest, ProductResponse, ProductResponseList,
    RequestById,
};
use crate::repository::ProductRepository;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tonic::Status;
use tracing::{debug, error, info};

/// Type alias for the one-shot channel a call is answered on.
pub type Reply<T> = oneshot::Sender<Result<T, Status>>;

/// One call to the `ProductService` RPC surface.
#[derive(Debug)]
pub enum RpcCall {
    Create {
        request: ProductRequest,
        respond_to: Reply<ProductResponse>,
    },
    FindById {
        request: RequestById,
        respond_to: Reply<ProductResponse>,
    },
    Delete {
        request: RequestById,
        respond_to: Reply<EmptyResponse>,
    },
    FindAll {
        request: EmptyRequest,
        respond_to: Reply<ProductResponseList>,
    },
}

/// Serves [`RpcCall`]s until every [`ProductServiceClient`] has been dropped.
pub struct RpcServer<R: ProductRepository + 'static> {
    receiver: mpsc::Receiver<RpcCall>,
    resource: Arc<ProductResource<R>>,
}

impl<R: ProductRepository + 'static> RpcServer<R> {
    /// Creates a server for `resource` and the client that reaches it.
    pub fn new(resource: ProductResource<R>, buffer_size: usize) -> (Self, ProductServiceClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let server = Self {
            receiver,
            resource: Arc::new(resource),
        };
        (server, ProductServiceClient::new(sender))
    }

    /// Runs the call loop. Once the channel closes, in-flight calls are drained before returning.
    pub async fn run(mut self) {
        info!("RPC server started");
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                call = self.receiver.recv() => match call {
                    Some(call) => {
                        let resource = Arc::clone(&self.resource);
                        in_flight.spawn(async move { dispatch(&resource, call).await });
                    }
                    None => break,
                },
                Some(finished) = in_flight.join_next(), if !in_flight.is_empty() => {
                    log_join(finished);
                }
            }
        }

        debug!(in_flight = in_flight.len(), "Draining calls");
        while let Some(finished) = in_flight.join_next().await {
            log_join(finished);
        }
        info!("RPC server stopped");
    }
}

async fn dispatch<R: ProductRepository>(resource: &ProductResource<R>, call: RpcCall) {
    match call {
        RpcCall::Create {
            request,
            respond_to,
        } => reply("create", respond_to, resource.create(request).await),
        RpcCall::FindById {
            request,
            respond_to,
        } => reply("find_by_id", respond_to, resource.find_by_id(request).await),
        RpcCall::Delete {
            request,
            respond_to,
        } => reply("delete", respond_to, resource.delete(request).await),
        RpcCall::FindAll {
            request,
            respond_to,
        } => reply("find_all", respond_to, resource.find_all(request).await),
    }
}

fn reply<T>(method: &'static str, respond_to: Reply<T>, result: Result<T, Status>) {
    match &result {
        Ok(_) => debug!(method, "Call ok"),
        Err(status) => debug!(
            method,
            code = ?status.code(),
            message = status.message(),
            "Call failed"
        ),
    }
    if respond_to.send(result).is_err() {
        debug!(method, "Caller went away before the reply");
    }
}

fn log_join(finished: Result<(), tokio::task::JoinError>) {
    if let Err(e) = finished {
        error!(error = %e, "RPC call task failed");
    }
}
