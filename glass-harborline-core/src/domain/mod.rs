//! Domain layer - entities
//!
//! Network definitions, wallet session state and query results. Pure data,
//! no I/O.

pub mod entities;

// Re-export domain components
pub use entities::*;
