//! Logger initialisation
//!
//! The crate logs through the standard `log` facade: route registration at
//! `debug`, scan summaries at `info`, duplicates and lenient skips at `warn`.
//! Applications that do not install their own logger can use
//! [`init_logging`], which sets up `env_logger` with the configured level as
//! the fallback when `RUST_LOG` is unset.
//!
//! ```rust,no_run
//! use restroute_core::config::RestRouteConfig;
//!
//! let config = RestRouteConfig::load()?;
//! restroute_core::logging::init_logging(&config.logging);
//! log::info!("building route table");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::LoggingConfig;

/// Install `env_logger`; returns false if a logger was already set
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_module_path(false)
        .try_init()
        .is_ok()
}

/// Logger for tests: captured by the test harness, safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_test_logging();
        assert!(!init_logging(&LoggingConfig::default()));
        log::debug!("logger still usable");
    }
}
