//! sqlike: reverse-matching cache for SQL `LIKE` patterns
//!
//! This crate indexes `LIKE`-style patterns in a trie and answers, for an
//! arbitrary string, which registered pattern matches it and what payload was
//! registered with that pattern. Patterns that share a literal prefix share
//! trie nodes, so one walk over the input replaces testing every pattern in
//! turn.
//!
//! # Features
//!
//! - **`%` wildcards** matching zero or more characters
//! - **Bracket protection** for literal `%`, `[` and `]`
//! - **Generic payloads** returned verbatim on a match
//! - **Concurrent lookups** behind a readers-writer lock
//! - **TOML pattern files** for seeding a trie
//! - **Subscriber setup** from configuration (feature: `logging`)
//!
//! # Example
//!
//! ```rust
//! use sqlike::prelude::*;
//!
//! let trie = LikeTrie::new(0);
//! trie.register("test-%", 0);
//! trie.register("test-%-post", 1);
//! trie.register("test-a-%", 2);
//!
//! assert_eq!(trie.lookup("test-b-post").unwrap().payload, 1);
//! assert_eq!(trie.lookup("test-a-test").unwrap().payload, 2);
//! assert_eq!(trie.lookup("test-b-test").unwrap().payload, 0);
//! assert!(trie.lookup("testpost").is_none());
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod trie;

/// Subscriber setup from [`LoggingConfig`].
#[cfg(feature = "logging")]
pub mod logging;

pub use config::file::{PatternEntry, PatternFile};
pub use config::{DEFAULT_CAPACITY, LogFormat, LoggingConfig, TrieConfig};
pub use error::{LikeError, Result};
#[cfg(feature = "logging")]
pub use logging::init_logging;
pub use trie::{LikeMatch, LikeTrie, TrieStats};
