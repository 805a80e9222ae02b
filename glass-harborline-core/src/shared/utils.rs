//! Utility functions for the wallet core
//!
//! Address syntax checks, hex chain id parsing and fixed-point formatting.

use crate::shared::error::WalletError;
use crate::shared::types::ChainId;
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;

/// Validate Ethereum address format
///
/// Accepts `0x` followed by 40 hex digits. All-lowercase and all-uppercase
/// digits are taken as-is; mixed case must match the EIP-55 checksum.
pub fn validate_ethereum_address(address: &str) -> Result<Address, WalletError> {
    if !address.starts_with("0x") {
        return Err(WalletError::invalid_address(format!(
            "{:?} must start with 0x",
            address
        )));
    }

    if address.len() != 42 {
        return Err(WalletError::invalid_address(format!(
            "{:?} must be 42 characters long",
            address
        )));
    }

    let digits = &address[2..];
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::invalid_address(format!(
            "{:?} contains invalid hex characters",
            address
        )));
    }

    let parsed: Address = address
        .parse()
        .map_err(|_| WalletError::invalid_address(format!("{:?} is not a 20-byte address", address)))?;

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && to_checksum(&parsed, None) != address {
        return Err(WalletError::invalid_address(format!(
            "{:?} has an invalid EIP-55 checksum",
            address
        )));
    }

    Ok(parsed)
}

/// Parse a hex-encoded chain id as returned by `eth_chainId`
pub fn parse_hex_chain_id(value: &str) -> Result<ChainId, WalletError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| WalletError::provider(format!("Chain id {:?} is not 0x-prefixed", value)))?;

    ChainId::from_str_radix(digits, 16)
        .map_err(|e| WalletError::provider(format!("Invalid chain id {:?}: {}", value, e)))
}

/// Format an amount of base units with `decimals` places, trimming trailing
/// zeros ("1.5", "0", "0.000000000000000001").
pub fn format_base_units(amount: U256, decimals: u8) -> String {
    let digits = amount.to_string();
    let decimals = decimals as usize;

    let (whole, fraction) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{:0>width$}", digits, width = decimals))
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, fraction)
    }
}
