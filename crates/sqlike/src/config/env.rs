//! Environment-based configuration.

use std::str::FromStr;

use super::{LogFormat, TrieConfig};
use crate::error::{LikeError, Result};

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "SQLIKE";

/// Environment variable reader.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        std::env::var(self.var_name(name)).ok()
    }

    /// Get a parsed value.
    ///
    /// A variable that is set but does not parse is an error rather than a
    /// silent fallback.
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        raw.trim().parse().map(Some).map_err(|e| {
            LikeError::config(format!("{}='{raw}': {e}", self.var_name(name)))
        })
    }

    /// Overlay `<PREFIX>_CAPACITY`, `<PREFIX>_LOG_LEVEL` and
    /// `<PREFIX>_LOG_FORMAT` on the default configuration.
    pub fn trie_config(&self) -> Result<TrieConfig> {
        let mut config = TrieConfig::default();

        if let Some(capacity) = self.parse::<usize>("capacity")? {
            config.capacity = capacity;
        }
        if let Some(level) = self.get("log_level") {
            config.logging.level = level;
        }
        if let Some(format) = self.get("log_format") {
            config.logging.format = format.parse::<LogFormat>()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own prefix so tests running in parallel never see
    // each other's variables.
    #[allow(unsafe_code)]
    fn set(name: &str, value: &str) {
        // SAFETY: the variable names are unique to the calling test.
        unsafe { std::env::set_var(name, value) };
    }

    #[test]
    fn var_name_with_prefix() {
        let env = EnvConfig::new("SQLIKE");
        assert_eq!(env.var_name("capacity"), "SQLIKE_CAPACITY");
        assert_eq!(EnvConfig::new("").var_name("log_level"), "LOG_LEVEL");
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let env = EnvConfig::new("SQLIKE_TEST_UNSET");
        let config = env.trie_config().unwrap();
        assert_eq!(config, TrieConfig::default());
    }

    #[test]
    fn overlays_set_variables() {
        set("SQLIKE_TEST_SET_CAPACITY", "32");
        set("SQLIKE_TEST_SET_LOG_LEVEL", "sqlike=trace");
        set("SQLIKE_TEST_SET_LOG_FORMAT", "json");

        let config = EnvConfig::new("SQLIKE_TEST_SET").trie_config().unwrap();
        assert_eq!(config.capacity, 32);
        assert_eq!(config.logging.level, "sqlike=trace");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn invalid_capacity_is_an_error() {
        set("SQLIKE_TEST_BAD_CAPACITY", "lots");

        let err = EnvConfig::new("SQLIKE_TEST_BAD").trie_config().unwrap_err();
        assert!(err.to_string().contains("SQLIKE_TEST_BAD_CAPACITY='lots'"));
    }

    #[test]
    fn invalid_format_is_an_error() {
        set("SQLIKE_TEST_FMT_LOG_FORMAT", "xml");

        let err = EnvConfig::new("SQLIKE_TEST_FMT").trie_config().unwrap_err();
        assert!(matches!(err, LikeError::Config { .. }));
    }
}
