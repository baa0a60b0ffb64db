//! Subscriber setup for applications that embed the trie.
//!
//! The library itself only emits `tracing` events. This module installs a
//! `tracing-subscriber` formatter configured from [`LoggingConfig`]. It is
//! available with the `logging` feature.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{LikeError, Result};

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| LikeError::config(format!("invalid log level '{}': {e}", config.level)))
}

/// Install a global subscriber.
///
/// Returns `Ok(false)` if another subscriber was already installed, so it is
/// safe to call more than once.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init().is_ok(),
        LogFormat::Compact => builder.compact().try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };
    Ok(installed)
}
