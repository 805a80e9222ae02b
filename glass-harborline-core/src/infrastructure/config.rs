//! Front-end configuration
//!
//! The core itself reads nothing from the environment. Only the terminal
//! front-end needs to know where the wallet bridge lives and how loud to log.
//! Values come from `.env` and `HARBORLINE_*` variables, falling back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_LOG_LEVEL, DEFAULT_WALLET_BRIDGE_URL, ENV_PREFIX};
use crate::shared::error::WalletError;
use crate::shared::types::WalletResult;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub wallet_bridge_url: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            wallet_bridge_url: DEFAULT_WALLET_BRIDGE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load `.env` if present, then layer `HARBORLINE_*` variables over the defaults
    pub fn from_env() -> WalletResult<Self> {
        dotenv::dotenv().ok();
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load(environment: config::Environment) -> WalletResult<Self> {
        let defaults = Self::default();
        let loaded: Self = config::Config::builder()
            .set_default("wallet_bridge_url", defaults.wallet_bridge_url)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> WalletResult<()> {
        let url = self.wallet_bridge_url.trim();
        if url.is_empty() {
            return Err(WalletError::config("wallet_bridge_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(WalletError::config(format!(
                "wallet_bridge_url must be an http(s) URL, got {:?}",
                url
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(WalletError::config(format!(
                "log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ClientConfig::load(env(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.wallet_bridge_url, "http://127.0.0.1:8787");
    }

    #[test]
    fn test_environment_overrides() {
        let config = ClientConfig::load(env(&[
            ("HARBORLINE_WALLET_BRIDGE_URL", "https://bridge.example.org"),
            ("HARBORLINE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.wallet_bridge_url, "https://bridge.example.org");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_rejects_non_http_bridge() {
        let err = ClientConfig::load(env(&[("HARBORLINE_WALLET_BRIDGE_URL", "ftp://bridge")])).unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = ClientConfig {
            log_level: "verbose".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
