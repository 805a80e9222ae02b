use ethers::types::U256;
use serde::Serialize;

use crate::shared::utils::format_base_units;

// Basic types for read-only chain queries
pub type ChainId = u64;
pub type BlockNumber = u64;
pub type Timestamp = u64;

/// Native currency amount kept as exact base units, with its display form
/// derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeAmount {
    pub base_units: U256,
    pub formatted: String,
    pub symbol: &'static str,
}

impl NativeAmount {
    pub fn new(base_units: U256, decimals: u8, symbol: &'static str) -> Self {
        Self {
            base_units,
            formatted: format_base_units(base_units, decimals),
            symbol,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.base_units.is_zero()
    }
}

impl std::fmt::Display for NativeAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.formatted, self.symbol)
    }
}

/// The subset of a block header the client reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    pub number: BlockNumber,
    pub timestamp: Timestamp,
    pub gas_used: U256,
}

/// Application identity handed to the wallet provider once per process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppMetadata {
    pub name: String,
    pub logo_url: String,
}

/// Network a wallet provider is told to operate against at connect time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderBinding {
    pub rpc_url: String,
    pub chain_id: ChainId,
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
