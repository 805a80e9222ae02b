//! Infrastructure layer - configuration and logging for front-ends

pub mod config;
pub mod logger;

pub use self::config::ClientConfig;
pub use logger::init_logging;
