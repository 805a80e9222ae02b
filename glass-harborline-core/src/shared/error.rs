//! Error handling for the wallet core
//!
//! Every core operation returns either a value or one of the kinds below.
//! Nothing is swallowed and nothing is retried; the front-end renders the
//! message as-is.

use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("No account granted by the wallet")]
    NoAccountGranted,

    #[error("Wallet provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Discriminant of [`WalletError`], handy for matching without payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAddress,
    NoAccountGranted,
    ProviderRequestFailed,
    NetworkUnavailable,
    Config,
}

impl WalletError {
    /// Create an invalid address error
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress(message.into())
    }

    /// Create a wallet provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::ProviderRequestFailed(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkUnavailable(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAddress(_) => ErrorKind::InvalidAddress,
            Self::NoAccountGranted => ErrorKind::NoAccountGranted,
            Self::ProviderRequestFailed(_) => ErrorKind::ProviderRequestFailed,
            Self::NetworkUnavailable(_) => ErrorKind::NetworkUnavailable,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<config::ConfigError> for WalletError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_creation() {
        let address_error = WalletError::invalid_address("abc");
        let provider_error = WalletError::provider("user rejected");
        let network_error = WalletError::network("connection refused");

        assert!(matches!(address_error, WalletError::InvalidAddress(_)));
        assert!(matches!(provider_error, WalletError::ProviderRequestFailed(_)));
        assert!(matches!(network_error, WalletError::NetworkUnavailable(_)));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(WalletError::NoAccountGranted.kind(), ErrorKind::NoAccountGranted);
        assert_eq!(WalletError::network("x").kind(), ErrorKind::NetworkUnavailable);
        assert_eq!(WalletError::config("x").kind(), ErrorKind::Config);
    }

    #[test]
    fn test_error_conversions() {
        let config_error = config::ConfigError::Message("missing key".to_string());
        let wallet_error: WalletError = config_error.into();

        assert_eq!(wallet_error.kind(), ErrorKind::Config);
        assert!(wallet_error.to_string().contains("missing key"));
    }

    #[test]
    fn test_error_display() {
        let error = WalletError::invalid_address("0x123");
        let display = format!("{}", error);

        assert!(display.contains("Invalid address"));
        assert!(display.contains("0x123"));
        assert_eq!(
            WalletError::NoAccountGranted.to_string(),
            "No account granted by the wallet"
        );
    }
}
