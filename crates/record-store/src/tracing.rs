//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for any binary built on the record store.
//!
//! The store actor logs with an `entity_type` field instead of module paths, so the subscriber
//! hides targets (`with_target(false)`) and uses the compact format, which shows spans inline
//! (e.g. `create:find_by_name_ignore_case`).
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Every request, with full payloads
//! RUST_LOG=debug cargo run
//!
//! # Store internals only
//! RUST_LOG=record_store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a create followed by a delete reads:
//!
//! ```text
//! INFO Store started entity_type="Product"
//! INFO create: Saved entity_type="Product" id=1 size=1
//! INFO delete: Deleted entity_type="Product" id=1 size=0
//! ```

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
