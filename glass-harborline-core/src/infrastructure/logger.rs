//! Logging setup
//!
//! The library only talks to the `log` facade. Front-ends call
//! [`init_logging`] once; `RUST_LOG` wins over the configured level.

use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging(level: &str) {
    INIT.call_once(|| {
        let level = level.to_lowercase();
        // Dependencies stay at warn; the core and the front-end use `level`.
        let env = env_logger::Env::default().default_filter_or(format!(
            "warn,{}={level},harborline={level}",
            env!("CARGO_CRATE_NAME")
        ));
        if let Err(e) = env_logger::Builder::from_env(env)
            .format_timestamp_millis()
            .try_init()
        {
            eprintln!("Failed to initialize logger: {e}");
        }
    });
}
