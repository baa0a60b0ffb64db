//! Convenient re-exports for common sqlike usage.
//!
//! # Example
//!
//! ```rust
//! use sqlike::prelude::*;
//!
//! fn route(trie: &LikeTrie<&'static str>, path: &str) -> Result<&'static str> {
//!     trie.find(path).map(|m| m.payload)
//! }
//!
//! let trie = LikeTrie::new(0);
//! trie.register("/users/%", "users");
//! assert_eq!(route(&trie, "/users/42").unwrap(), "users");
//! assert!(route(&trie, "/posts/1").unwrap_err().is_not_found());
//! ```

// Core types
pub use crate::trie::{LikeMatch, LikeTrie, TrieStats};

// Error handling
pub use crate::error::{LikeError, Result};

// Configuration
pub use crate::config::file::{PatternEntry, PatternFile};
pub use crate::config::{LogFormat, LoggingConfig, TrieConfig};
