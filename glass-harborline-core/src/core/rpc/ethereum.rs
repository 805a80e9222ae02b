use async_trait::async_trait;
use ethers::{
    core::types::{Address, BlockNumber, U256},
    providers::{Http, Middleware, Provider},
};

use crate::core::rpc::RpcTransport;
use crate::shared::error::WalletError;
use crate::shared::types::{BlockHeader, WalletResult};

/// HTTP JSON-RPC transport for a single endpoint.
///
/// The ethers provider is built on each call, so a bad endpoint is reported
/// by the query that hits it rather than when the transport is created.
#[derive(Debug, Clone)]
pub struct EthersTransport {
    endpoint: &'static str,
}

impl EthersTransport {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    fn provider(&self) -> WalletResult<Provider<Http>> {
        Provider::<Http>::try_from(self.endpoint).map_err(|e| {
            WalletError::network(format!("Invalid RPC endpoint {}: {}", self.endpoint, e))
        })
    }
}

#[async_trait]
impl RpcTransport for EthersTransport {
    async fn get_balance(&self, address: Address) -> WalletResult<U256> {
        let provider = self.provider()?;
        provider.get_balance(address, None).await.map_err(|e| {
            WalletError::network(format!("eth_getBalance on {} failed: {}", self.endpoint, e))
        })
    }

    async fn get_latest_block(&self) -> WalletResult<BlockHeader> {
        let provider = self.provider()?;
        let block = provider
            .get_block(BlockNumber::Latest)
            .await
            .map_err(|e| {
                WalletError::network(format!(
                    "eth_getBlockByNumber on {} failed: {}",
                    self.endpoint, e
                ))
            })?
            .ok_or_else(|| {
                WalletError::network(format!("{} returned no latest block", self.endpoint))
            })?;

        let number = block
            .number
            .ok_or_else(|| WalletError::network("Latest block is missing its number"))?;

        Ok(BlockHeader {
            number: number.as_u64(),
            timestamp: block_timestamp(block.timestamp)?,
            gas_used: block.gas_used,
        })
    }
}

fn block_timestamp(raw: U256) -> WalletResult<u64> {
    u64::try_from(raw)
        .map_err(|_| WalletError::network(format!("Block timestamp {} does not fit in 64 bits", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::BASE_SEPOLIA_CONFIG;

    #[tokio::test]
    async fn test_malformed_endpoint_fails_at_query_time() {
        let transport = EthersTransport::new("not a url");

        let err = transport.get_balance(Address::zero()).await.unwrap_err();
        assert!(matches!(err, WalletError::NetworkUnavailable(_)));

        let err = transport.get_latest_block().await.unwrap_err();
        assert!(err.to_string().contains("Invalid RPC endpoint"));
    }

    #[test]
    fn test_block_timestamp_rejects_oversized_values() {
        assert_eq!(block_timestamp(U256::from(1_700_000_000u64)).unwrap(), 1_700_000_000);
        assert_eq!(block_timestamp(U256::from(u64::MAX)).unwrap(), u64::MAX);

        let err = block_timestamp(U256::from(u64::MAX) + U256::one()).unwrap_err();
        assert!(matches!(err, WalletError::NetworkUnavailable(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_unavailable() {
        // Port 9 (discard) on localhost is not expected to speak JSON-RPC
        let transport = EthersTransport::new("http://127.0.0.1:9");

        let err = transport.get_latest_block().await.unwrap_err();
        assert!(matches!(err, WalletError::NetworkUnavailable(_)));
    }

    #[tokio::test]
    #[ignore = "requires network access to the Base Sepolia RPC endpoint"]
    async fn test_zero_address_balance_on_live_chain() {
        let transport = EthersTransport::new(BASE_SEPOLIA_CONFIG.rpc_endpoint);
        let balance = transport.get_balance(Address::zero()).await.expect("live balance");
        assert!(balance >= U256::zero());
    }
}
