//! Domain entities and value objects

pub mod network;
pub mod session;
pub mod query;

// Re-export entities
pub use network::*;
pub use session::*;
pub use query::*;
