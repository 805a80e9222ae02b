//! Wallet session state
//!
//! `Disconnected --connect--> Connecting --ok--> Connected`, and back to
//! `Disconnected` on any handshake failure. A network toggle does not move
//! the state; a `Connected` value keeps the network it was negotiated on so
//! callers can tell when it has gone stale.

use ethers::types::Address;
use serde::Serialize;

use crate::domain::entities::network::NetworkConfig;
use crate::shared::types::ChainId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WalletSessionState {
    Disconnected,
    Connecting {
        network: NetworkConfig,
    },
    Connected {
        address: Address,
        /// Chain id the wallet itself reported, which may differ from
        /// `network.chain_id`.
        reported_chain_id: ChainId,
        network: NetworkConfig,
    },
}

impl Default for WalletSessionState {
    fn default() -> Self {
        Self::Disconnected
    }
}

impl WalletSessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Connected { address, .. } => Some(*address),
            _ => None,
        }
    }

    pub fn reported_chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Connected { reported_chain_id, .. } => Some(*reported_chain_id),
            _ => None,
        }
    }

    /// Network the session was negotiated against, if any
    pub fn bound_network(&self) -> Option<&NetworkConfig> {
        match self {
            Self::Disconnected => None,
            Self::Connecting { network } | Self::Connected { network, .. } => Some(network),
        }
    }

    /// True when connected on a network other than `current`
    pub fn is_stale_for(&self, current: &NetworkConfig) -> bool {
        match self {
            Self::Connected { network, .. } => !network.is_same_network(current),
            _ => false,
        }
    }

    /// True when the wallet reports a chain other than the one it was bound to
    pub fn has_chain_mismatch(&self) -> bool {
        match self {
            Self::Connected { reported_chain_id, network, .. } => *reported_chain_id != network.chain_id,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{BASE_MAINNET_CONFIG, BASE_SEPOLIA_CONFIG};

    fn connected_on_sepolia(reported_chain_id: ChainId) -> WalletSessionState {
        WalletSessionState::Connected {
            address: Address::repeat_byte(0x11),
            reported_chain_id,
            network: BASE_SEPOLIA_CONFIG,
        }
    }

    #[test]
    fn test_default_is_disconnected() {
        let state = WalletSessionState::default();
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.bound_network(), None);
    }

    #[test]
    fn test_staleness_after_switch() {
        let state = connected_on_sepolia(84532);
        assert!(!state.is_stale_for(&BASE_SEPOLIA_CONFIG));
        assert!(state.is_stale_for(&BASE_MAINNET_CONFIG));
        assert!(!WalletSessionState::Disconnected.is_stale_for(&BASE_MAINNET_CONFIG));
    }

    #[test]
    fn test_chain_mismatch() {
        assert!(!connected_on_sepolia(84532).has_chain_mismatch());
        assert!(connected_on_sepolia(8453).has_chain_mismatch());
    }
}
