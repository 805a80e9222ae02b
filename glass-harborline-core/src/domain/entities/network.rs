//! Network entity for the wallet core

use serde::Serialize;

use crate::shared::types::ChainId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Chain descriptor an RPC client is parametrised with. `id` is the
/// canonical chain id and must agree with the owning [`NetworkConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainIdentity {
    pub id: ChainId,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
}

/// One supported network. Defined at process start and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub chain: ChainIdentity,
    pub chain_id: ChainId,
    pub rpc_endpoint: &'static str,
    /// Only used to build human-readable links.
    pub explorer_base_url: &'static str,
    pub label: &'static str,
}

impl NetworkConfig {
    pub fn native_currency(&self) -> &NativeCurrency {
        &self.chain.native_currency
    }

    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_base_url.trim_end_matches('/'), address)
    }

    pub fn block_url(&self, number: u64) -> String {
        format!("{}/block/{}", self.explorer_base_url.trim_end_matches('/'), number)
    }

    pub fn is_same_network(&self, other: &NetworkConfig) -> bool {
        self.chain_id == other.chain_id
    }
}

impl std::fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.chain_id)
    }
}
