//! # RPC Adapter
//!
//! The `ProductService` RPC surface: wire messages ([`wire`]), the handlers that translate
//! between the wire and the service ([`ProductResource`]), and an in-process transport
//! ([`RpcServer`], [`ProductServiceClient`]). A failed call ends with a [`tonic::Status`].
//!
//! | Call | Request | Response | Failure statuses |
//! |------|---------|----------|------------------|
//! | `create` | [`ProductRequest`] | [`ProductResponse`] | `ALREADY_EXISTS`, `INVALID_ARGUMENT` |
//! | `find_by_id` | [`RequestById`] | [`ProductResponse`] | `NOT_FOUND` |
//! | `delete` | [`RequestById`] | [`EmptyResponse`] | `NOT_FOUND` |
//! | `find_all` | [`EmptyRequest`] | [`ProductResponseList`] | |
//!
//! Any call may also end with `INTERNAL` when the repository fails.

pub mod client;
pub mod resource;
pub mod server;
pub mod wire;

pub use client::*;
pub use resource::*;
pub use server::*;
pub use wire::*;
