//! Runtime configuration for the catalog system.

use tracing::warn;

/// Environment variable overriding [`CatalogConfig::store_buffer`].
pub const STORE_BUFFER_ENV: &str = "CATALOG_STORE_BUFFER";
/// Environment variable overriding [`CatalogConfig::rpc_buffer`].
pub const RPC_BUFFER_ENV: &str = "CATALOG_RPC_BUFFER";

/// Channel capacities for the actors that make up a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Capacity of the product store's request channel.
    pub store_buffer: usize,
    /// Capacity of the RPC server's call channel.
    pub rpc_buffer: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_buffer: 32,
            rpc_buffer: 64,
        }
    }
}

impl CatalogConfig {
    /// Defaults, overridden by `CATALOG_STORE_BUFFER` / `CATALOG_RPC_BUFFER` when set.
    ///
    /// A value that is not a positive integer is ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            store_buffer: buffer_setting(&lookup, STORE_BUFFER_ENV, defaults.store_buffer),
            rpc_buffer: buffer_setting(&lookup, RPC_BUFFER_ENV, defaults.rpc_buffer),
        }
    }
}

fn buffer_setting(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: usize) -> usize {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!(variable = name, value = %raw, default, "Invalid buffer size, using default");
            default
        }
    }
}
