//! The pattern trie.
//!
//! [`LikeTrie`] indexes LIKE patterns so that a single walk over an input
//! text finds a registered pattern matching it. Patterns sharing a literal
//! prefix share nodes.
//!
//! # Pattern syntax
//!
//! - `%` matches zero or more characters.
//! - `[` opens a protected region when a `]` appears anywhere later in the
//!   pattern; the first `]` after it closes the region. Inside the region
//!   every character is literal, `%` included. The brackets themselves match
//!   nothing. A `[` with no later `]`, and a `]` outside a region, are
//!   ordinary characters.
//!
//! So a literal `%` is written `[%]`, a literal `[` is `[[]` and a literal
//! `]` is `]` or `[]]`.
//!
//! # Which pattern wins
//!
//! A lookup returns the first match found by a depth-first search that
//! prefers literal edges over wildcard edges and shorter `%` spans over
//! longer ones. It is not guaranteed to be the most specific match.

mod insert;
mod matcher;
mod node;
mod stats;

use std::fmt;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;

pub use stats::TrieStats;

use self::insert::Registration;
use self::node::Arena;
use self::stats::LookupCounters;
use crate::config::file::PatternFile;
use crate::config::{DEFAULT_CAPACITY, TrieConfig};
use crate::error::{LikeError, Result};

/// A successful lookup: the matching pattern and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeMatch<V> {
    /// The pattern as it was registered.
    pub pattern: String,
    /// The payload registered with the pattern.
    pub payload: V,
}

impl<V> LikeMatch<V> {
    /// Split into the pattern and the payload.
    #[must_use]
    pub fn into_parts(self) -> (String, V) {
        (self.pattern, self.payload)
    }
}

/// A trie of LIKE patterns guarded by a readers-writer lock.
///
/// Registration takes the lock exclusively; lookups share it. Wrap the trie
/// in an `Arc` to share it between threads.
///
/// # Example
///
/// ```rust
/// use sqlike::LikeTrie;
///
/// let trie = LikeTrie::new(0);
/// trie.register("test-%-post", 1);
/// trie.register("test-[%]-post", 2);
///
/// let m = trie.lookup("test-a-post").unwrap();
/// assert_eq!((m.pattern.as_str(), m.payload), ("test-%-post", 1));
///
/// let m = trie.lookup("test-%-post").unwrap();
/// assert_eq!((m.pattern.as_str(), m.payload), ("test-[%]-post", 2));
///
/// assert!(trie.lookup("test-a-pre").is_none());
/// ```
pub struct LikeTrie<V> {
    arena: RwLock<Arena<V>>,
    capacity: usize,
    counters: LookupCounters,
}

impl<V> LikeTrie<V> {
    /// Create an empty trie.
    ///
    /// `capacity` is a hint for the expected number of patterns. It does not
    /// limit the trie and nothing is ever evicted.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            arena: RwLock::new(Arena::new()),
            capacity,
            counters: LookupCounters::default(),
        }
    }

    /// Create an empty trie from a configuration.
    #[must_use]
    pub fn with_config(config: &TrieConfig) -> Self {
        Self::new(config.capacity)
    }

    // The arena has no state that a panicking writer could leave half
    // updated in a harmful way: at worst a path of unmarked nodes exists.
    fn read(&self) -> RwLockReadGuard<'_, Arena<V>> {
        self.arena.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arena<V>> {
        self.arena.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a pattern with its payload.
    ///
    /// Registering a pattern whose normalized path is already terminal
    /// replaces the stored pattern and payload. A pattern that reduces to no
    /// edges at all (such as the empty string) is ignored.
    pub fn register(&self, pattern: &str, payload: V) {
        let mut arena = self.write();
        Self::register_locked(&mut arena, pattern, payload);
    }

    /// Register many patterns under a single lock acquisition.
    pub fn register_all<I, S>(&self, patterns: I)
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        let mut arena = self.write();
        for (pattern, payload) in patterns {
            Self::register_locked(&mut arena, pattern.as_ref(), payload);
        }
    }

    fn register_locked(arena: &mut Arena<V>, pattern: &str, payload: V) {
        let outcome = insert::insert(arena, pattern, payload);
        match outcome {
            Registration::Ignored => {
                tracing::debug!(pattern, "ignoring pattern with no edges");
            }
            Registration::Added | Registration::Replaced => {
                tracing::debug!(
                    pattern,
                    ?outcome,
                    nodes = arena.node_count(),
                    patterns = arena.pattern_count(),
                    "registered pattern"
                );
            }
        }
    }

    /// Number of distinct registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().pattern_count()
    }

    /// Check if no pattern has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of trie nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    /// The capacity hint the trie was created with.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get trie statistics.
    #[must_use]
    pub fn stats(&self) -> TrieStats {
        let arena = self.read();
        TrieStats {
            patterns: arena.pattern_count(),
            nodes: arena.node_count(),
            capacity: self.capacity,
            hits: self.counters.hits(),
            misses: self.counters.misses(),
        }
    }
}

impl<V: Clone> LikeTrie<V> {
    /// Find a registered pattern that matches all of `text`.
    ///
    /// Returns `None` when nothing matches. Empty text never matches.
    pub fn lookup(&self, text: &str) -> Option<LikeMatch<V>> {
        let chars: Vec<char> = text.chars().collect();
        let _span = tracing::trace_span!("like_lookup", chars = chars.len()).entered();

        let found = {
            let arena = self.read();
            matcher::find(&arena, &chars).map(|terminal| LikeMatch {
                pattern: terminal.pattern.clone(),
                payload: terminal.payload.clone(),
            })
        };

        self.counters.record(found.is_some());
        match &found {
            Some(m) => tracing::trace!(pattern = %m.pattern, "lookup hit"),
            None => tracing::trace!("lookup miss"),
        }
        found
    }

    /// Like [`lookup`](Self::lookup), but reports a miss as
    /// [`LikeError::NotFound`].
    pub fn find(&self, text: &str) -> Result<LikeMatch<V>> {
        self.lookup(text).ok_or_else(|| LikeError::not_found(text))
    }
}

impl<V: DeserializeOwned> LikeTrie<V> {
    /// Build a trie from a parsed pattern file, registering its entries in
    /// order.
    #[must_use]
    pub fn from_pattern_file(file: PatternFile<V>) -> Self {
        let trie = Self::new(file.capacity.unwrap_or(DEFAULT_CAPACITY));
        trie.register_all(
            file.patterns
                .into_iter()
                .map(|entry| (entry.pattern, entry.payload)),
        );
        trie
    }

    /// Read a TOML pattern file and build a trie from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        PatternFile::load(path).map(Self::from_pattern_file)
    }
}

impl<V> Default for LikeTrie<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<V> fmt::Debug for LikeTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("LikeTrie")
            .field("patterns", &stats.patterns)
            .field("nodes", &stats.nodes)
            .field("capacity", &stats.capacity)
            .finish_non_exhaustive()
    }
}

impl<S: AsRef<str>, V> Extend<(S, V)> for LikeTrie<V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        let arena = self.arena.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (pattern, payload) in iter {
            Self::register_locked(arena, pattern.as_ref(), payload);
        }
    }
}

impl<S: AsRef<str>, V> FromIterator<(S, V)> for LikeTrie<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}
