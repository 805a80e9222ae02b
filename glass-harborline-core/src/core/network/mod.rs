//! Network registry and active network selection

pub mod registry;
pub mod selector;

pub use registry::*;
pub use selector::*;
