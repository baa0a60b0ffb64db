//! TOML pattern files.
//!
//! A pattern file seeds a trie with patterns and their payloads:
//!
//! ```toml
//! capacity = 256
//!
//! [[patterns]]
//! pattern = "test-%-post"
//! payload = 1
//!
//! [[patterns]]
//! pattern = "test-[%]-post"
//! payload = 2
//! ```
//!
//! The payload can be any type that deserializes from the TOML value.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{LikeError, Result};

/// One pattern and its payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternEntry<V> {
    /// The LIKE pattern, exactly as it should be registered.
    pub pattern: String,
    /// The payload returned when the pattern matches.
    pub payload: V,
}

/// Contents of a pattern file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternFile<V> {
    /// Optional capacity hint for the trie built from this file.
    #[serde(default)]
    pub capacity: Option<usize>,
    /// Patterns in registration order.
    #[serde(default = "Vec::new")]
    pub patterns: Vec<PatternEntry<V>>,
}

impl<V: DeserializeOwned> PatternFile<V> {
    /// Parse a pattern file from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a pattern file from any reader, such as stdin.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Read and parse a pattern file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = LikeError::with_io_context(
            std::fs::read_to_string(path),
            format!("failed to read pattern file {}", path.display()),
        )?;
        let file = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            patterns = file.patterns.len(),
            "loaded pattern file"
        );
        Ok(file)
    }
}

impl<V> PatternFile<V> {
    /// Number of entries in the file, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the file has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
