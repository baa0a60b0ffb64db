//! Error types for sqlike.
//!
//! Registration never fails and a missed lookup is an ordinary `None`, so the
//! only errors here come from the `Result`-returning lookup helper and from
//! loading configuration or pattern files.

use thiserror::Error;

/// Maximum number of characters of the looked-up text shown in a not-found message.
const MAX_TEXT_DISPLAY: usize = 80;

/// Format the looked-up text for display, truncating long inputs.
fn format_text_snippet(text: &str) -> String {
    if text.is_empty() {
        return "(empty text)".to_string();
    }

    let total = text.chars().count();
    if total <= MAX_TEXT_DISPLAY {
        return format!("'{text}'");
    }

    let head: String = text.chars().take(MAX_TEXT_DISPLAY).collect();
    format!("'{head}...' ({total} chars)")
}

/// The main error type for sqlike operations.
#[derive(Debug, Error)]
pub enum LikeError {
    /// No registered pattern matches the text.
    #[error("no matching expression was found for {}", format_text_snippet(text))]
    NotFound {
        /// The text that was looked up.
        text: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A pattern or configuration file is not valid TOML for the expected shape.
    #[error("invalid pattern file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for sqlike operations.
pub type Result<T> = std::result::Result<T, LikeError>;

impl LikeError {
    /// Create a not-found error for the given text.
    pub fn not_found(text: impl Into<String>) -> Self {
        Self::NotFound { text: text.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O result with context.
    pub fn with_io_context<T>(result: std::io::Result<T>, context: impl Into<String>) -> Result<T> {
        result.map_err(|e| Self::io_context(context, e))
    }

    /// Check if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get the looked-up text if this is a not-found error.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::NotFound { text } => Some(text),
            _ => None,
        }
    }
}
