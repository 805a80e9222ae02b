//! Rendering of core outcomes as labeled lines
//!
//! The core returns structured values and typed errors; front-ends turn them
//! into a fixed, ordered list of lines through [`Panel`].

use ethers::utils::to_checksum;

use crate::domain::entities::{
    BalanceLookup, BlockSnapshot, NetworkConfig, QueryResult, SessionSnapshot, WalletSessionState,
};
use crate::shared::error::WalletError;
use crate::CoreStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub lines: Vec<String>,
}

impl Panel {
    pub fn ready(network_label: &str) -> Self {
        Self {
            lines: vec![
                "Ready".to_string(),
                format!("Active network: {}", network_label),
                "Connect wallet to begin (read-only).".to_string(),
            ],
        }
    }

    pub fn switched(network: &NetworkConfig) -> Self {
        Self {
            lines: vec![format!(
                "Switched to {}. Reconnect wallet to refresh.",
                network.label
            )],
        }
    }

    /// Failures are shown verbatim, one line
    pub fn failure(error: &WalletError) -> Self {
        Self {
            lines: vec![error.to_string()],
        }
    }

    pub fn session(snapshot: &SessionSnapshot) -> Self {
        let address = to_checksum(&snapshot.address, None);
        let mut lines = vec![
            "Session active".to_string(),
            format!("Network: {}", snapshot.network.label),
            format!("chainId: {}", snapshot.reported_chain_id),
            format!("Address: {}", address),
            format!("{} balance: {}", snapshot.balance.symbol, snapshot.balance),
            format!("Explorer: {}", snapshot.network.address_url(&address)),
        ];
        if snapshot.chain_mismatch() {
            lines.push(format!(
                "Note: wallet is on chain {}, not {} ({})",
                snapshot.reported_chain_id, snapshot.network.label, snapshot.network.chain_id
            ));
        }
        Self { lines }
    }

    pub fn block(snapshot: &BlockSnapshot) -> Self {
        let timestamp = chrono::DateTime::from_timestamp(snapshot.timestamp as i64, 0)
            .map(|t| format!("{} ({})", snapshot.timestamp, t.to_rfc3339()))
            .unwrap_or_else(|| snapshot.timestamp.to_string());
        Self {
            lines: vec![
                "Block snapshot".to_string(),
                format!("Network: {}", snapshot.network.label),
                format!("Block: {}", snapshot.number),
                format!("Timestamp: {}", timestamp),
                format!("Gas used: {}", snapshot.gas_used),
                format!("Explorer: {}", snapshot.network.block_url(snapshot.number)),
            ],
        }
    }

    pub fn balance(lookup: &BalanceLookup) -> Self {
        let address = to_checksum(&lookup.address, None);
        Self {
            lines: vec![
                "Balance lookup".to_string(),
                format!("Network: {}", lookup.network.label),
                format!("Address: {}", address),
                format!("{} balance: {}", lookup.balance.symbol, lookup.balance),
                format!("Explorer: {}", lookup.network.address_url(&address)),
            ],
        }
    }

    pub fn status(status: &CoreStatus) -> Self {
        let mut lines = vec![format!("Active network: {}", status.network_label)];
        match &status.session_state {
            WalletSessionState::Disconnected => lines.push("Wallet: disconnected".to_string()),
            WalletSessionState::Connecting { network } => {
                lines.push(format!("Wallet: connecting on {}", network.label))
            }
            WalletSessionState::Connected {
                address,
                reported_chain_id,
                network,
            } => {
                lines.push(format!("Wallet: {}", to_checksum(address, None)));
                lines.push(format!("chainId: {}", reported_chain_id));
                if network.label != status.network_label {
                    lines.push(format!(
                        "Session was opened on {}. Reconnect wallet to refresh.",
                        network.label
                    ));
                }
            }
        }
        Self { lines }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl From<&QueryResult> for Panel {
    fn from(result: &QueryResult) -> Self {
        match result {
            QueryResult::Session(s) => Self::session(s),
            QueryResult::Block(b) => Self::block(b),
            QueryResult::Balance(b) => Self::balance(b),
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
