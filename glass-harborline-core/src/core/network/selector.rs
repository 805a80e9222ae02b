//! Active network selection
//!
//! The selector is the only writer of "which network is active". Everything
//! else receives the current configuration by value from [`NetworkSelector::current`].

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::network::registry::NetworkRegistry;
use crate::domain::entities::NetworkConfig;

pub struct NetworkSelector {
    registry: NetworkRegistry,
    // Index into `registry`; always 0 or 1.
    active: AtomicUsize,
}

impl NetworkSelector {
    /// Start on the registry's default network
    pub fn new(registry: NetworkRegistry) -> Self {
        Self {
            registry,
            active: AtomicUsize::new(0),
        }
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn current(&self) -> NetworkConfig {
        self.network_at(self.active.load(Ordering::SeqCst))
    }

    /// Switch to the other network and return it.
    ///
    /// Wallet session state is left alone; a connected session
    /// stays bound to the previous network until the caller reconnects.
    pub fn toggle(&self) -> NetworkConfig {
        let previous = self.active.fetch_xor(1, Ordering::SeqCst);
        let next = self.network_at(previous ^ 1);
        log::info!(
            "Active network switched from {} to {}",
            self.network_at(previous),
            next
        );
        next
    }

    fn network_at(&self, index: usize) -> NetworkConfig {
        // The registry always holds two entries, so `index` is in range.
        *self
            .registry
            .get(index)
            .unwrap_or_else(|| self.registry.default_network())
    }
}

impl Default for NetworkSelector {
    fn default() -> Self {
        Self::new(NetworkRegistry::base())
    }
}
