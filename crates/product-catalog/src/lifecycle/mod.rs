//! # System Lifecycle
//!
//! Wires the catalog together and takes it apart again.
//!
//! ## Wiring
//!
//! ```text
//! ProductServiceClient ──► RpcServer ──► ProductResource ──► ProductService
//!                                                               │
//!                                   StoreActor<Product> ◄── StoreProductRepository
//! ```
//!
//! The store and the RPC server each run in their own Tokio task. The service is constructed
//! with its repository; nothing is injected later.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the RPC call channel.
//! 2. **RPC server drains** - in-flight calls finish, then the server drops the resource, and
//!    with it the last store client.
//! 3. **Store stops** - its request channel is now closed.
//! 4. **Await completion** - both tasks are joined in that order.
//!
//! Clones of the RPC client handed out elsewhere keep the server alive; drop them first.

pub mod catalog_system;

pub use catalog_system::*;
