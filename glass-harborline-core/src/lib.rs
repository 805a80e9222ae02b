//! Glass Harborline Core
//!
//! Read-only client core for Base. Connects a wallet through an EIP-1193
//! provider, reads the latest block and native balances over JSON-RPC, and
//! toggles between Base Sepolia and Base Mainnet.
//!
//! ## Architecture
//!
//! - **Core**: network registry and selector, RPC clients, wallet session, queries
//! - **Domain**: network, session and query result entities
//! - **Shared**: common types, constants, errors and utilities
//! - **Infrastructure**: configuration and logging for front-ends
//! - **View**: rendering of results as labeled lines
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glass_harborline_core::{AppMetadata, Eip1193BridgeProvider, HarborlineCore};
//!
//! # async fn run() -> Result<(), glass_harborline_core::WalletError> {
//! let app = AppMetadata {
//!     name: "Glass Harborline (Built for Base)".to_string(),
//!     logo_url: "https://base.org/favicon.ico".to_string(),
//! };
//! let provider = Eip1193BridgeProvider::new("http://127.0.0.1:8787", app)?;
//! let core = HarborlineCore::with_defaults(Arc::new(provider));
//!
//! let block = core.read_latest_block().await?;
//! core.toggle_network();
//! let balance = core.read_balance("0x0000000000000000000000000000000000000000").await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod view;

use crate::core::network::{NetworkRegistry, NetworkSelector};
use crate::core::query::QueryService;
use crate::core::rpc::{HttpRpcClientFactory, RpcClientFactory};
use crate::core::wallet::{WalletProvider, WalletSession};

// Re-export specific components
pub use crate::core::rpc::RpcClient;
pub use crate::core::wallet::Eip1193BridgeProvider;
pub use crate::view::Panel;

// Re-export domain entities
pub use crate::domain::entities::{
    BalanceLookup, BlockSnapshot, NetworkConfig, QueryResult, SessionSnapshot, WalletSessionState,
};

// Re-export shared types
pub use shared::error::{ErrorKind, WalletError};
pub use shared::types::{AppMetadata, NativeAmount, WalletResult};

/// What the front-end shows as "current"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreStatus {
    pub network_label: &'static str,
    pub session_state: WalletSessionState,
}

/// The five actions a front-end may invoke
pub struct HarborlineCore {
    selector: Arc<NetworkSelector>,
    session: Arc<WalletSession>,
    queries: QueryService,
}

impl HarborlineCore {
    pub fn new(
        provider: Arc<dyn WalletProvider>,
        factory: Arc<dyn RpcClientFactory>,
        registry: NetworkRegistry,
    ) -> Self {
        let selector = Arc::new(NetworkSelector::new(registry));
        let session = Arc::new(WalletSession::new(provider));
        let queries = QueryService::new(selector.clone(), session.clone(), factory);

        log::debug!("Harborline core ready on {}", selector.current());
        Self {
            selector,
            session,
            queries,
        }
    }

    /// Built-in Base registry and HTTP RPC clients
    pub fn with_defaults(provider: Arc<dyn WalletProvider>) -> Self {
        Self::new(
            provider,
            Arc::new(HttpRpcClientFactory::new()),
            NetworkRegistry::base(),
        )
    }

    /// Connect the wallet on the active network. Every call repeats the
    /// handshake, so a wallet that changed chains is picked up.
    pub async fn connect(&self) -> WalletResult<QueryResult> {
        self.queries.connect_wallet().await.map(QueryResult::from)
    }

    pub async fn read_latest_block(&self) -> WalletResult<QueryResult> {
        self.queries.latest_block().await.map(QueryResult::from)
    }

    pub async fn read_balance(&self, address_input: &str) -> WalletResult<QueryResult> {
        self.queries.balance_of(address_input).await.map(QueryResult::from)
    }

    /// Flip the active network. The wallet session is left as it was.
    pub fn toggle_network(&self) -> NetworkConfig {
        self.selector.toggle()
    }

    pub async fn current(&self) -> CoreStatus {
        CoreStatus {
            network_label: self.selector.current().label,
            session_state: self.session.state().await,
        }
    }
}

// Version information
pub use shared::constants::{NAME, VERSION};
