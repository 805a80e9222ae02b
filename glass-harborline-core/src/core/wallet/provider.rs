//! Wallet provider boundary
//!
//! The provider is the external agent holding the user's keys. The core only
//! asks it for accounts and for the chain it is on. A provider is created
//! once per process with fixed application metadata; the network it should
//! operate against is passed with every request.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::shared::constants::USER_REJECTED_REQUEST;
use crate::shared::error::WalletError;
use crate::shared::types::{AppMetadata, ProviderBinding, WalletResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `eth_requestAccounts`
    async fn request_accounts(&self, binding: &ProviderBinding) -> WalletResult<Vec<String>>;

    /// `eth_chainId`, hex encoded
    async fn request_chain_id(&self, binding: &ProviderBinding) -> WalletResult<String>;
}

/// Forwards EIP-1193 requests as JSON-RPC to a wallet bridge over HTTP
pub struct Eip1193BridgeProvider {
    client: Client,
    bridge_url: String,
    app: AppMetadata,
}

impl Eip1193BridgeProvider {
    pub fn new(bridge_url: impl Into<String>, app: AppMetadata) -> WalletResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| WalletError::provider(format!("Failed to build bridge client: {}", e)))?;

        Ok(Self {
            client,
            bridge_url: bridge_url.into(),
            app,
        })
    }

    async fn request(&self, method: &str, binding: &ProviderBinding) -> WalletResult<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": [],
            "app": {
                "name": self.app.name,
                "logoUrl": self.app.logo_url,
            },
            "network": {
                "rpcUrl": binding.rpc_url,
                "chainId": binding.chain_id,
            },
        });

        log::debug!("{} via wallet bridge {} (chain {})", method, self.bridge_url, binding.chain_id);
        let resp = self
            .client
            .post(&self.bridge_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::provider(format!("{} failed: {}", method, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WalletError::provider(format!(
                "{} failed: wallet bridge returned HTTP {}",
                method, status
            )));
        }

        let resp_json: Value = resp
            .json()
            .await
            .map_err(|e| WalletError::provider(format!("Invalid {} response: {}", method, e)))?;

        if let Some(error) = resp_json.get("error") {
            let code = error.get("code").and_then(Value::as_i64);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(match code {
                Some(USER_REJECTED_REQUEST) => {
                    WalletError::provider(format!("{} rejected by user: {}", method, message))
                }
                _ => WalletError::provider(format!("{} failed: {}", method, message)),
            });
        }

        resp_json
            .get("result")
            .cloned()
            .ok_or_else(|| WalletError::provider(format!("{} response has no result", method)))
    }
}

#[async_trait]
impl WalletProvider for Eip1193BridgeProvider {
    async fn request_accounts(&self, binding: &ProviderBinding) -> WalletResult<Vec<String>> {
        let result = self.request("eth_requestAccounts", binding).await?;
        match result {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(account) => Ok(account),
                    other => Err(WalletError::provider(format!(
                        "eth_requestAccounts returned a non-string account: {}",
                        other
                    ))),
                })
                .collect(),
            other => Err(WalletError::provider(format!(
                "eth_requestAccounts result must be an array, got {}",
                other
            ))),
        }
    }

    async fn request_chain_id(&self, binding: &ProviderBinding) -> WalletResult<String> {
        match self.request("eth_chainId", binding).await? {
            Value::String(chain_id) => Ok(chain_id),
            other => Err(WalletError::provider(format!(
                "eth_chainId result must be a hex string, got {}",
                other
            ))),
        }
    }
}
