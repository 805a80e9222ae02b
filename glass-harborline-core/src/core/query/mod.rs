//! The three read-only queries
//!
//! Every query reads the active network exactly once, when it starts. A
//! toggle that lands while a query is in flight does not affect that query's
//! RPC calls, but the caller may observe results from the old network.

use std::sync::Arc;

use crate::core::network::NetworkSelector;
use crate::core::rpc::RpcClientFactory;
use crate::core::wallet::WalletSession;
use crate::domain::entities::{BalanceLookup, BlockSnapshot, SessionSnapshot, WalletSessionState};
use crate::shared::types::WalletResult;
use crate::shared::utils::validate_ethereum_address;

pub struct QueryService {
    selector: Arc<NetworkSelector>,
    session: Arc<WalletSession>,
    factory: Arc<dyn RpcClientFactory>,
}

impl QueryService {
    pub fn new(
        selector: Arc<NetworkSelector>,
        session: Arc<WalletSession>,
        factory: Arc<dyn RpcClientFactory>,
    ) -> Self {
        Self {
            selector,
            session,
            factory,
        }
    }

    /// Connected address, wallet chain id and balance on the active network.
    ///
    /// Connects first when there is no session, or when the session was
    /// negotiated on a different network than the active one.
    pub async fn session_snapshot(&self) -> WalletResult<SessionSnapshot> {
        let network = self.selector.current();

        match self.session.state().await {
            WalletSessionState::Connected {
                address,
                reported_chain_id,
                network: bound,
            } if bound.is_same_network(&network) => {
                let balance = self.factory.client_for(&network).get_balance(address).await?;
                Ok(SessionSnapshot {
                    network,
                    address,
                    reported_chain_id,
                    balance,
                })
            }
            _ => self.session.connect(&network, self.factory.as_ref()).await,
        }
    }

    /// Run the wallet handshake on the active network, whatever the current
    /// session state. The wallet is asked again for its account and chain id.
    pub async fn connect_wallet(&self) -> WalletResult<SessionSnapshot> {
        let network = self.selector.current();
        self.session.connect(&network, self.factory.as_ref()).await
    }

    pub async fn latest_block(&self) -> WalletResult<BlockSnapshot> {
        let network = self.selector.current();
        let header = self.factory.client_for(&network).get_latest_block().await?;

        Ok(BlockSnapshot {
            network,
            number: header.number,
            timestamp: header.timestamp,
            gas_used: header.gas_used,
        })
    }

    /// Balance of an arbitrary address. The input is validated as given,
    /// before any network call is made.
    pub async fn balance_of(&self, address_input: &str) -> WalletResult<BalanceLookup> {
        let address = validate_ethereum_address(address_input)?;
        let network = self.selector.current();
        let balance = self.factory.client_for(&network).get_balance(address).await?;

        Ok(BalanceLookup {
            network,
            address,
            balance,
        })
    }
}
