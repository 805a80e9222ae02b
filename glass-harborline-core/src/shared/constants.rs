//! Constants for the wallet core
//!
//! Compiled-in network definitions and the application identity presented
//! to the wallet provider.

use crate::domain::entities::{ChainIdentity, NativeCurrency, NetworkConfig};

// Application identity
pub const APP_NAME: &str = "Glass Harborline (Built for Base)";
pub const APP_LOGO_URL: &str = "https://base.org/favicon.ico";

// Chain ids
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

pub const NATIVE_DECIMALS: u8 = 18;

pub const SEPOLIA_ETHER: NativeCurrency = NativeCurrency {
    name: "Sepolia Ether",
    symbol: "ETH",
    decimals: NATIVE_DECIMALS,
};

pub const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: NATIVE_DECIMALS,
};

// Network configurations
pub static BASE_SEPOLIA_CONFIG: NetworkConfig = NetworkConfig {
    chain: ChainIdentity {
        id: BASE_SEPOLIA_CHAIN_ID,
        name: "base-sepolia",
        native_currency: SEPOLIA_ETHER,
    },
    chain_id: BASE_SEPOLIA_CHAIN_ID,
    rpc_endpoint: "https://sepolia.base.org",
    explorer_base_url: "https://sepolia.basescan.org",
    label: "Base Sepolia",
};

pub static BASE_MAINNET_CONFIG: NetworkConfig = NetworkConfig {
    chain: ChainIdentity {
        id: BASE_MAINNET_CHAIN_ID,
        name: "base",
        native_currency: ETHER,
    },
    chain_id: BASE_MAINNET_CHAIN_ID,
    rpc_endpoint: "https://mainnet.base.org",
    explorer_base_url: "https://basescan.org",
    label: "Base Mainnet",
};

// Front-end defaults
pub const DEFAULT_WALLET_BRIDGE_URL: &str = "http://127.0.0.1:8787";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const ENV_PREFIX: &str = "HARBORLINE";

// EIP-1193 error code for a request the user dismissed
pub const USER_REJECTED_REQUEST: i64 = 4001;

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_configs() {
        assert_eq!(BASE_SEPOLIA_CONFIG.chain_id, 84532);
        assert_eq!(BASE_MAINNET_CONFIG.chain_id, 8453);
        assert_eq!(BASE_SEPOLIA_CONFIG.chain.id, BASE_SEPOLIA_CONFIG.chain_id);
        assert_eq!(BASE_MAINNET_CONFIG.chain.id, BASE_MAINNET_CONFIG.chain_id);
        assert_eq!(BASE_SEPOLIA_CONFIG.label, "Base Sepolia");
        assert_eq!(BASE_MAINNET_CONFIG.label, "Base Mainnet");
    }

    #[test]
    fn test_native_currency() {
        assert_eq!(BASE_SEPOLIA_CONFIG.chain.native_currency.symbol, "ETH");
        assert_eq!(BASE_MAINNET_CONFIG.chain.native_currency.decimals, 18);
    }
}
