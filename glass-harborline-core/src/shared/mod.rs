//! Shared types, utilities, and constants
//!
//! Error taxonomy, amount/address helpers and the compiled-in network
//! definitions used throughout the core.

pub mod types;
pub mod utils;
pub mod constants;
pub mod error;

// Re-export shared components
pub use types::*;
pub use utils::*;
pub use error::*;
