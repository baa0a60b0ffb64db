//! Lookup counters and trie statistics.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hit and miss counters, updated without taking the trie's write lock.
#[derive(Debug, Default)]
pub(crate) struct LookupCounters {
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl LookupCounters {
    pub(crate) fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub(crate) fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

/// Statistics about a [`LikeTrie`](crate::LikeTrie).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Number of distinct registered patterns (terminal nodes).
    pub patterns: usize,
    /// Number of nodes, root included.
    pub nodes: usize,
    /// Capacity hint the trie was created with.
    pub capacity: usize,
    /// Lookups that found a pattern.
    pub hits: usize,
    /// Lookups that found nothing.
    pub misses: usize,
}

impl TrieStats {
    /// Total number of lookups.
    #[must_use]
    pub const fn lookups(&self) -> usize {
        self.hits + self.misses
    }

    /// Get the hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            1.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_hits_and_misses() {
        let counters = LookupCounters::default();
        counters.record(true);
        counters.record(false);
        counters.record(true);
        assert_eq!(counters.hits(), 2);
        assert_eq!(counters.misses(), 1);
    }

    #[test]
    fn hit_rate_with_no_lookups() {
        let stats = TrieStats {
            patterns: 0,
            nodes: 1,
            capacity: 0,
            hits: 0,
            misses: 0,
        };
        assert_eq!(stats.lookups(), 0);
        assert!((stats.hit_rate() - 1.0).abs() < 0.001);
    }

    #[test]
    fn hit_rate_ratio() {
        let stats = TrieStats {
            patterns: 3,
            nodes: 10,
            capacity: 16,
            hits: 1,
            misses: 3,
        };
        assert_eq!(stats.lookups(), 4);
        assert!((stats.hit_rate() - 0.25).abs() < 0.001);
    }
}
