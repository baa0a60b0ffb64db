//! Configuration types for sqlike.
//!
//! This module defines the trie configuration, the logging configuration used
//! by the optional subscriber setup, and loaders for environment variables
//! and TOML pattern files.

pub mod env;
pub mod file;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::LikeError;

/// Default capacity hint (1024 patterns).
pub const DEFAULT_CAPACITY: usize = 1024;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for a [`LikeTrie`](crate::LikeTrie).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Expected number of patterns.
    ///
    /// This is a hint only. The trie never evicts and never refuses a
    /// registration because of it.
    pub capacity: usize,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            logging: LoggingConfig::default(),
        }
    }
}

impl TrieConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity hint.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Build a configuration from `SQLIKE_*` environment variables on top of
    /// the defaults.
    pub fn from_env() -> crate::Result<Self> {
        env::EnvConfig::default().trie_config()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g. `"info"` or
    /// `"sqlike=trace"`).
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-oriented output.
    Pretty,

    /// Single-line output.
    #[default]
    Compact,

    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = LikeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" | "ndjson" => Ok(Self::Json),
            other => Err(LikeError::config(format!("unknown log format '{other}'"))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}
