//! Read-only JSON-RPC clients
//!
//! A [`RpcClient`] is bound to exactly one network: its transport talks only
//! to that network's endpoint and its amounts are decoded with that chain's
//! native currency. Clients are cheap and derived fresh for every query from
//! whatever network is active at the time; nothing is cached across networks.

pub mod ethereum;

use std::sync::Arc;

use async_trait::async_trait;
use ethers::types::{Address, U256};

use crate::domain::entities::NetworkConfig;
use crate::shared::types::{BlockHeader, NativeAmount, WalletResult};

pub use ethereum::EthersTransport;

/// The two JSON-RPC reads the client needs. Any transport, HTTP status or
/// JSON-RPC error surfaces as `NetworkUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn get_balance(&self, address: Address) -> WalletResult<U256>;

    async fn get_latest_block(&self) -> WalletResult<BlockHeader>;
}

/// Stateless read client for one network
#[derive(Clone)]
pub struct RpcClient {
    network: NetworkConfig,
    transport: Arc<dyn RpcTransport>,
}

impl RpcClient {
    pub fn new(network: NetworkConfig, transport: Arc<dyn RpcTransport>) -> Self {
        Self { network, transport }
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn endpoint(&self) -> &'static str {
        self.network.rpc_endpoint
    }

    pub async fn get_balance(&self, address: Address) -> WalletResult<NativeAmount> {
        log::debug!("eth_getBalance {:?} on {}", address, self.network);
        let wei = self.transport.get_balance(address).await?;
        let currency = self.network.native_currency();
        Ok(NativeAmount::new(wei, currency.decimals, currency.symbol))
    }

    pub async fn get_latest_block(&self) -> WalletResult<BlockHeader> {
        log::debug!("eth_getBlockByNumber(latest) on {}", self.network);
        self.transport.get_latest_block().await
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("network", &self.network.label)
            .field("endpoint", &self.network.rpc_endpoint)
            .finish()
    }
}

/// Produces a client bound to the given network. Must be a pure function of
/// its input.
#[cfg_attr(test, mockall::automock)]
pub trait RpcClientFactory: Send + Sync {
    fn client_for(&self, network: &NetworkConfig) -> RpcClient;
}

/// Factory backed by ethers' HTTP provider
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRpcClientFactory;

impl HttpRpcClientFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RpcClientFactory for HttpRpcClientFactory {
    fn client_for(&self, network: &NetworkConfig) -> RpcClient {
        let transport = EthersTransport::new(network.rpc_endpoint);
        RpcClient::new(*network, Arc::new(transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{BASE_MAINNET_CONFIG, BASE_SEPOLIA_CONFIG};
    use crate::shared::error::WalletError;

    #[test]
    fn test_factory_binds_endpoint_of_given_network() {
        let factory = HttpRpcClientFactory::new();

        let sepolia = factory.client_for(&BASE_SEPOLIA_CONFIG);
        let mainnet = factory.client_for(&BASE_MAINNET_CONFIG);

        assert_eq!(sepolia.endpoint(), "https://sepolia.base.org");
        assert_eq!(mainnet.endpoint(), "https://mainnet.base.org");
        assert_eq!(sepolia.network().chain.id, 84532);
    }

    #[test]
    fn test_factory_is_pure() {
        let factory = HttpRpcClientFactory::new();
        let first = factory.client_for(&BASE_MAINNET_CONFIG);
        let second = factory.client_for(&BASE_MAINNET_CONFIG);

        assert_eq!(first.network(), second.network());
        assert_eq!(first.endpoint(), second.endpoint());
    }

    #[tokio::test]
    async fn test_balance_is_decoded_with_native_currency() {
        let mut transport = MockRpcTransport::new();
        transport
            .expect_get_balance()
            .times(1)
            .returning(|_| Ok(U256::from(2_500_000_000_000_000_000u64)));

        let client = RpcClient::new(BASE_SEPOLIA_CONFIG, Arc::new(transport));
        let balance = client.get_balance(Address::zero()).await.unwrap();

        assert_eq!(balance.formatted, "2.5");
        assert_eq!(balance.symbol, "ETH");
        assert_eq!(balance.base_units, U256::from(2_500_000_000_000_000_000u64));
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let mut transport = MockRpcTransport::new();
        transport
            .expect_get_latest_block()
            .returning(|| Err(WalletError::network("connection refused")));

        let client = RpcClient::new(BASE_MAINNET_CONFIG, Arc::new(transport));
        let err = client.get_latest_block().await.unwrap_err();

        assert!(matches!(err, WalletError::NetworkUnavailable(_)));
    }

    // Live chain: block numbers never go backwards on repeated reads.
    #[tokio::test]
    #[ignore = "requires network access to the Base RPC endpoints"]
    async fn test_latest_block_is_monotonic_on_live_chain() {
        let factory = HttpRpcClientFactory::new();
        for network in [BASE_SEPOLIA_CONFIG, BASE_MAINNET_CONFIG] {
            let client = factory.client_for(&network);
            let first = client.get_latest_block().await.expect("first read");
            let second = client.get_latest_block().await.expect("second read");
            assert!(second.number >= first.number, "{} went backwards", network);
        }
    }
}
