//! Wallet session management for the wallet core
//!
//! Wraps the single wallet provider handle, runs the connect handshake and
//! keeps the session state. The session is bound to the network it was
//! negotiated on; switching networks does not touch it.

pub mod provider;

use std::sync::Arc;

use ethers::types::Address;
use tokio::sync::RwLock;

use crate::core::rpc::RpcClientFactory;
use crate::domain::entities::{NetworkConfig, SessionSnapshot, WalletSessionState};
use crate::shared::error::WalletError;
use crate::shared::types::{ChainId, ProviderBinding, WalletResult};
use crate::shared::utils::parse_hex_chain_id;

pub use provider::{Eip1193BridgeProvider, WalletProvider};

pub struct WalletSession {
    provider: Arc<dyn WalletProvider>,
    state: RwLock<WalletSessionState>,
}

impl WalletSession {
    pub fn new(provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            provider,
            state: RwLock::new(WalletSessionState::Disconnected),
        }
    }

    pub async fn state(&self) -> WalletSessionState {
        self.state.read().await.clone()
    }

    pub async fn connected_address(&self) -> Option<Address> {
        self.state.read().await.address()
    }

    pub async fn reported_chain_id(&self) -> Option<ChainId> {
        self.state.read().await.reported_chain_id()
    }

    /// Run the connect handshake against `network` and attach its balance.
    ///
    /// Any failure leaves the session `Disconnected`.
    pub async fn connect(
        &self,
        network: &NetworkConfig,
        factory: &dyn RpcClientFactory,
    ) -> WalletResult<SessionSnapshot> {
        *self.state.write().await = WalletSessionState::Connecting { network: *network };

        match self.handshake(network, factory).await {
            Ok(snapshot) => {
                *self.state.write().await = WalletSessionState::Connected {
                    address: snapshot.address,
                    reported_chain_id: snapshot.reported_chain_id,
                    network: *network,
                };
                log::info!("Wallet {:?} connected on {}", snapshot.address, network);
                Ok(snapshot)
            }
            Err(e) => {
                *self.state.write().await = WalletSessionState::Disconnected;
                log::warn!("Wallet connect on {} failed: {}", network, e);
                Err(e)
            }
        }
    }

    async fn handshake(
        &self,
        network: &NetworkConfig,
        factory: &dyn RpcClientFactory,
    ) -> WalletResult<SessionSnapshot> {
        let binding = ProviderBinding {
            rpc_url: network.rpc_endpoint.to_string(),
            chain_id: network.chain_id,
        };

        let accounts = self.provider.request_accounts(&binding).await?;
        let account = accounts.first().ok_or(WalletError::NoAccountGranted)?;
        let address: Address = account.parse().map_err(|_| {
            WalletError::provider(format!("Wallet returned a malformed account {:?}", account))
        })?;

        let chain_hex = self.provider.request_chain_id(&binding).await?;
        let reported_chain_id = parse_hex_chain_id(&chain_hex)?;
        if reported_chain_id != network.chain_id {
            log::warn!(
                "Wallet reports chain {} while connecting to {}",
                reported_chain_id,
                network
            );
        }

        let balance = factory.client_for(network).get_balance(address).await?;

        Ok(SessionSnapshot {
            network: *network,
            address,
            reported_chain_id,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::provider::MockWalletProvider;
    use super::*;
    use crate::core::rpc::{MockRpcClientFactory, MockRpcTransport, RpcClient};
    use crate::shared::constants::{BASE_MAINNET_CONFIG, BASE_SEPOLIA_CONFIG};
    use ethers::types::U256;

    const ACCOUNT: &str = "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6";

    fn factory_with_balance(wei: u64) -> MockRpcClientFactory {
        let mut transport = MockRpcTransport::new();
        transport
            .expect_get_balance()
            .returning(move |_| Ok(U256::from(wei)));
        let transport: Arc<dyn crate::core::rpc::RpcTransport> = Arc::new(transport);

        let mut factory = MockRpcClientFactory::new();
        factory
            .expect_client_for()
            .returning(move |network| RpcClient::new(*network, transport.clone()));
        factory
    }

    fn provider_with(accounts: Vec<&'static str>, chain_hex: &'static str) -> MockWalletProvider {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_request_accounts()
            .returning(move |_| Ok(accounts.iter().map(|a| a.to_string()).collect()));
        provider
            .expect_request_chain_id()
            .returning(move |_| Ok(chain_hex.to_string()));
        provider
    }

    #[tokio::test]
    async fn test_connect_success() {
        let session = WalletSession::new(Arc::new(provider_with(vec![ACCOUNT], "0x14a34")));
        let factory = factory_with_balance(1_000_000_000_000_000_000);

        let snapshot = session.connect(&BASE_SEPOLIA_CONFIG, &factory).await.unwrap();

        assert_eq!(snapshot.address, ACCOUNT.parse::<Address>().unwrap());
        assert_eq!(snapshot.reported_chain_id, 84532);
        assert_eq!(snapshot.balance.formatted, "1");
        assert_eq!(snapshot.network.label, "Base Sepolia");
        assert!(!snapshot.chain_mismatch());

        let state = session.state().await;
        assert!(state.is_connected());
        assert_eq!(state.bound_network(), Some(&BASE_SEPOLIA_CONFIG));
        assert_eq!(session.reported_chain_id().await, Some(84532));
    }

    #[tokio::test]
    async fn test_provider_is_told_the_intended_network() {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_request_accounts()
            .withf(|binding| binding.chain_id == 8453 && binding.rpc_url == "https://mainnet.base.org")
            .times(1)
            .returning(|_| Ok(vec![ACCOUNT.to_string()]));
        provider
            .expect_request_chain_id()
            .withf(|binding| binding.chain_id == 8453)
            .times(1)
            .returning(|_| Ok("0x2105".to_string()));

        let session = WalletSession::new(Arc::new(provider));
        let snapshot = session
            .connect(&BASE_MAINNET_CONFIG, &factory_with_balance(0))
            .await
            .unwrap();

        assert_eq!(snapshot.reported_chain_id, 8453);
    }

    #[tokio::test]
    async fn test_empty_account_list_is_no_account_granted() {
        let mut provider = MockWalletProvider::new();
        provider.expect_request_accounts().returning(|_| Ok(Vec::new()));
        provider.expect_request_chain_id().times(0);

        let mut factory = MockRpcClientFactory::new();
        factory.expect_client_for().times(0);

        let session = WalletSession::new(Arc::new(provider));
        let err = session.connect(&BASE_SEPOLIA_CONFIG, &factory).await.unwrap_err();

        assert_eq!(err, WalletError::NoAccountGranted);
        assert_eq!(session.state().await, WalletSessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_disconnected() {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_request_accounts()
            .returning(|_| Err(WalletError::provider("rejected by user")));

        let session = WalletSession::new(Arc::new(provider));
        let err = session
            .connect(&BASE_SEPOLIA_CONFIG, &MockRpcClientFactory::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WalletError::ProviderRequestFailed(_)));
        assert!(!session.state().await.is_connected());
    }

    #[tokio::test]
    async fn test_balance_failure_leaves_disconnected() {
        let mut transport = MockRpcTransport::new();
        transport
            .expect_get_balance()
            .returning(|_| Err(WalletError::network("timeout")));
        let transport: Arc<dyn crate::core::rpc::RpcTransport> = Arc::new(transport);
        let mut factory = MockRpcClientFactory::new();
        factory
            .expect_client_for()
            .returning(move |network| RpcClient::new(*network, transport.clone()));

        let session = WalletSession::new(Arc::new(provider_with(vec![ACCOUNT], "0x14a34")));
        let err = session.connect(&BASE_SEPOLIA_CONFIG, &factory).await.unwrap_err();

        assert!(matches!(err, WalletError::NetworkUnavailable(_)));
        assert_eq!(session.state().await, WalletSessionState::Disconnected);
    }

    #[tokio::test]
    async fn test_mismatched_wallet_chain_is_surfaced_not_rejected() {
        // Wallet sits on mainnet while the client intended Sepolia
        let session = WalletSession::new(Arc::new(provider_with(vec![ACCOUNT], "0x2105")));

        let snapshot = session
            .connect(&BASE_SEPOLIA_CONFIG, &factory_with_balance(5))
            .await
            .unwrap();

        assert_eq!(snapshot.reported_chain_id, 8453);
        assert!(snapshot.chain_mismatch());
        assert!(session.state().await.has_chain_mismatch());
    }

    #[tokio::test]
    async fn test_malformed_chain_id_is_provider_failure() {
        let session = WalletSession::new(Arc::new(provider_with(vec![ACCOUNT], "base")));

        let err = session
            .connect(&BASE_SEPOLIA_CONFIG, &MockRpcClientFactory::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WalletError::ProviderRequestFailed(_)));
        assert_eq!(session.connected_address().await, None);
    }

    #[tokio::test]
    async fn test_malformed_account_is_provider_failure() {
        let session = WalletSession::new(Arc::new(provider_with(vec!["nope"], "0x14a34")));

        let err = session
            .connect(&BASE_SEPOLIA_CONFIG, &MockRpcClientFactory::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WalletError::ProviderRequestFailed(_)));
    }
}
