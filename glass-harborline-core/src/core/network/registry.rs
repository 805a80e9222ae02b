//! Ordered, immutable list of supported networks

use std::collections::HashSet;

use crate::domain::entities::NetworkConfig;
use crate::shared::constants::{BASE_MAINNET_CONFIG, BASE_SEPOLIA_CONFIG};
use crate::shared::error::WalletError;
use crate::shared::types::{ChainId, WalletResult};

/// Number of networks the two-way toggle operates on
pub const REGISTRY_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    networks: Vec<NetworkConfig>,
}

impl NetworkRegistry {
    /// Build a registry from custom configurations.
    ///
    /// Requires exactly two entries with distinct chain ids, each agreeing
    /// with its chain identity.
    pub fn new(networks: Vec<NetworkConfig>) -> WalletResult<Self> {
        if networks.len() != REGISTRY_SIZE {
            return Err(WalletError::config(format!(
                "Registry needs exactly {} networks, got {}",
                REGISTRY_SIZE,
                networks.len()
            )));
        }

        let mut seen: HashSet<ChainId> = HashSet::new();
        for network in &networks {
            if network.chain.id != network.chain_id {
                return Err(WalletError::config(format!(
                    "{} declares chain id {} but its chain identity is {}",
                    network.label, network.chain_id, network.chain.id
                )));
            }
            if !seen.insert(network.chain_id) {
                return Err(WalletError::config(format!(
                    "Duplicate chain id {} in registry",
                    network.chain_id
                )));
            }
        }

        Ok(Self { networks })
    }

    /// The compiled-in registry: Base Sepolia first, then Base Mainnet
    pub fn base() -> Self {
        Self {
            networks: vec![BASE_SEPOLIA_CONFIG, BASE_MAINNET_CONFIG],
        }
    }

    pub fn list_networks(&self) -> &[NetworkConfig] {
        &self.networks
    }

    pub fn default_network(&self) -> &NetworkConfig {
        &self.networks[0]
    }

    pub fn get(&self, index: usize) -> Option<&NetworkConfig> {
        self.networks.get(index)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::base()
    }
}
