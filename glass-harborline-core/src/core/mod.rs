//! Core client functionality
//!
//! Network selection, RPC clients, the wallet session and the read-only
//! queries built on top of them.

pub mod network;
pub mod rpc;
pub mod wallet;
pub mod query;
