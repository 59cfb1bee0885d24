//! # Product Catalog
//!
//! A product catalog exposed over an RPC surface: products have a name, a price, and a stock
//! quantity, and can be created, fetched by id, deleted, and listed.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`], [`converter`])
//! The persisted [`Product`](model::Product) record, the [`ProductInput`](model::ProductInput)
//! and [`ProductOutput`](model::ProductOutput) DTOs, and the field-for-field mapping between them.
//!
//! ### 2. The Port ([`repository`])
//! [`ProductRepository`](repository::ProductRepository) is everything the service needs from
//! persistence. [`StoreProductRepository`](repository::StoreProductRepository) implements it on
//! the actor-backed [`record_store`].
//!
//! ### 3. The Rules ([`service`])
//! [`ProductService`](service::ProductService) rejects duplicate names (ignoring case) and
//! unknown ids with typed [`ProductError`](service::ProductError)s.
//!
//! ### 4. The Surface ([`rpc`])
//! [`ProductResource`](rpc::ProductResource) turns wire requests into service calls and service
//! errors into a [`tonic::Status`]; [`RpcServer`](rpc::RpcServer) and
//! [`ProductServiceClient`](rpc::ProductServiceClient) carry the calls.
//!
//! ### 5. The Wiring ([`lifecycle`], [`config`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops everything.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p product-catalog
//! ```

pub mod config;
pub mod converter;
pub mod lifecycle;
pub mod model;
pub mod repository;
pub mod rpc;
pub mod service;
