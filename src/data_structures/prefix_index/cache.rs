//! Query cache for the prefix index.
//!
//! Entries map a normalized prefix to the words a previous query produced for
//! it. The whole cache is dropped on any mutation of the tree.

use fnv::FnvHashMap;

/// Counters describing how the query cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Queries answered from the cache
    pub hits: u64,
    /// Queries that had to walk the tree
    pub misses: u64,
    /// Number of wholesale invalidations
    pub invalidations: u64,
    /// Prefixes currently cached
    pub entries: usize,
}

#[derive(Debug)]
struct CachedResult {
    words: Vec<String>,
    /// The traversal ran out of words before reaching its limit.
    exhaustive: bool,
}

impl CachedResult {
    fn serves(&self, limit: usize) -> bool {
        self.exhaustive || self.words.len() >= limit
    }
}

#[derive(Debug)]
pub(crate) struct QueryCache {
    enabled: bool,
    entries: FnvHashMap<String, CachedResult>,
    hits: u64,
    misses: u64,
    invalidations: u64,
}

impl QueryCache {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: FnvHashMap::default(),
            hits: 0,
            misses: 0,
            invalidations: 0,
        }
    }

    /// Returns the first `limit` cached words for `prefix`, if the cached
    /// entry is complete enough to answer a query of that size.
    pub(crate) fn lookup(&mut self, prefix: &str, limit: usize) -> Option<Vec<String>> {
        match self.entries.get(prefix) {
            Some(entry) if entry.serves(limit) => {
                self.hits += 1;
                Some(entry.words.iter().take(limit).cloned().collect())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Records the words computed for `prefix` under `limit`.
    pub(crate) fn store(&mut self, prefix: String, words: &[String], limit: usize) {
        if !self.enabled {
            return;
        }
        let entry = CachedResult {
            words: words.to_vec(),
            exhaustive: words.len() < limit,
        };
        self.entries.insert(prefix, entry);
    }

    pub(crate) fn invalidate(&mut self) {
        self.entries.clear();
        self.invalidations += 1;
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            invalidations: self.invalidations,
            entries: self.entries.len(),
        }
    }
}
