//! Query results
//!
//! Built fresh for every call and never mutated afterwards. Each one carries
//! the network that was active when the query read the selector.

use ethers::types::{Address, U256};
use serde::Serialize;

use crate::domain::entities::network::NetworkConfig;
use crate::shared::types::{BlockNumber, ChainId, NativeAmount, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub network: NetworkConfig,
    pub address: Address,
    pub reported_chain_id: ChainId,
    pub balance: NativeAmount,
}

impl SessionSnapshot {
    pub fn chain_mismatch(&self) -> bool {
        self.reported_chain_id != self.network.chain_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSnapshot {
    pub network: NetworkConfig,
    pub number: BlockNumber,
    pub timestamp: Timestamp,
    pub gas_used: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceLookup {
    pub network: NetworkConfig,
    pub address: Address,
    pub balance: NativeAmount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryResult {
    Session(SessionSnapshot),
    Block(BlockSnapshot),
    Balance(BalanceLookup),
}

impl QueryResult {
    pub fn network(&self) -> &NetworkConfig {
        match self {
            Self::Session(s) => &s.network,
            Self::Block(b) => &b.network,
            Self::Balance(b) => &b.network,
        }
    }

    pub fn network_label(&self) -> &'static str {
        self.network().label
    }
}

impl From<SessionSnapshot> for QueryResult {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self::Session(snapshot)
    }
}

impl From<BlockSnapshot> for QueryResult {
    fn from(snapshot: BlockSnapshot) -> Self {
        Self::Block(snapshot)
    }
}

impl From<BalanceLookup> for QueryResult {
    fn from(lookup: BalanceLookup) -> Self {
        Self::Balance(lookup)
    }
}
