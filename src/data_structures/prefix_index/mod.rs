// Copyright (c) 2025 Lani Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Index Implementation
//!
//! A case-insensitive prefix tree answering "which words start with this
//! prefix?" with a bounded, lexicographically ordered result list. Query
//! results are cached per prefix and the cache is discarded wholesale on
//! every insertion.
//!
//! # Example
//!
//! ```
//! use lani_autocomplete_lib::data_structures::prefix_index::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.bulk_load(["cat", "car", "cart", "dog"]);
//!
//! assert_eq!(index.prefix_query("ca", 8), vec!["car", "cart", "cat"]);
//! assert_eq!(index.prefix_query("CA", 2), vec!["car", "cart"]);
//! assert!(index.contains("Dog"));
//! assert!(!index.contains("ca"));
//! ```
//!
//! # Concurrency
//!
//! Queries populate the cache, so both insertion and querying take
//! `&mut self`. Callers sharing an index across threads must wrap it in a
//! lock of their own.

mod cache;
mod error;
mod node;

#[cfg(test)]
mod tests;

pub use cache::CacheStats;
pub use error::{PrefixIndexError, PrefixIndexResult};

use cache::QueryCache;
use node::TrieNode;

/// Configuration options for the prefix index
#[derive(Debug, Clone)]
pub struct PrefixIndexConfig {
    /// Optional maximum word length in characters; `None` accepts any length
    pub max_word_len: Option<usize>,

    /// Whether prefix query results are cached
    pub cache_enabled: bool,
}

impl Default for PrefixIndexConfig {
    fn default() -> Self {
        Self {
            max_word_len: None,
            cache_enabled: true,
        }
    }
}

/// Outcome of loading a batch of words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkLoadReport {
    /// Words that were not in the index before
    pub inserted: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Words refused by validation (empty or too long)
    pub rejected: usize,
}

/// Case-insensitive prefix tree with a wholesale-invalidated query cache.
///
/// Key features:
/// * Lower-case normalization on every entry point
/// * Deterministic, lexicographically ordered prefix results
/// * Depth-first enumeration that stops as soon as the limit is reached
/// * Per-prefix result cache, cleared on any insertion
#[derive(Debug)]
pub struct PrefixIndex {
    /// The root node; never terminal
    root: TrieNode,

    /// Cached prefix query results
    cache: QueryCache,

    /// Number of terminal nodes in the tree
    word_count: usize,

    /// Configuration options
    config: PrefixIndexConfig,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixIndexConfig::default())
    }

    /// Creates a new empty `PrefixIndex` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the index.
    pub fn with_config(config: PrefixIndexConfig) -> Self {
        Self {
            root: TrieNode::new(),
            cache: QueryCache::new(config.cache_enabled),
            word_count: 0,
            config,
        }
    }

    /// Returns the configuration this index was built with.
    pub fn config(&self) -> &PrefixIndexConfig {
        &self.config
    }

    /// Inserts a word into the index.
    ///
    /// The query cache is invalidated even when the word was already present.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. Stored lower-cased.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already present.
    /// * `Err(PrefixIndexError)` - If the word is empty or too long.
    pub fn insert<W>(&mut self, word: W) -> PrefixIndexResult<bool>
    where
        W: AsRef<str>,
    {
        let is_new = self.insert_normalized(&normalize(word.as_ref()))?;
        self.invalidate_cache();
        Ok(is_new)
    }

    /// Inserts every word from `words`, skipping the ones validation rejects.
    ///
    /// The resulting tree does not depend on the order of `words`. The cache
    /// is invalidated once at the end.
    pub fn bulk_load<I, W>(&mut self, words: I) -> BulkLoadReport
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut report = BulkLoadReport::default();

        for word in words {
            let word = word.as_ref();
            match self.insert_normalized(&normalize(word)) {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.duplicates += 1,
                Err(e) => {
                    tracing::warn!(word = %word, error = %e, "Skipping word during bulk load");
                    report.rejected += 1;
                }
            }
        }

        self.invalidate_cache();
        tracing::info!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            rejected = report.rejected,
            total = self.word_count,
            "Bulk load complete"
        );
        report
    }

    /// Checks whether `word` was inserted as a complete word.
    ///
    /// A prefix of an inserted word does not count. Never touches the cache.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.root
            .descend(&normalize(word.as_ref()))
            .is_some_and(|node| node.is_terminal)
    }

    /// Finds up to `limit` words starting with `prefix`, in lexicographic order.
    ///
    /// An empty prefix or a zero limit yields no suggestions. Results are
    /// served from the cache when a previous query for the same prefix
    /// already covers `limit`; otherwise they are computed and cached.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete. Matched case-insensitively.
    /// * `limit` - Maximum number of words to return.
    ///
    /// # Returns
    ///
    /// The first `min(limit, matches)` matching words, lower-cased.
    pub fn prefix_query<P>(&mut self, prefix: P, limit: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        let normalized = normalize(prefix);

        if let Some(words) = self.cache.lookup(&normalized, limit) {
            tracing::trace!(prefix = %normalized, limit, "Prefix query served from cache");
            return words;
        }

        let mut words = Vec::new();
        if let Some(node) = self.root.descend(&normalized) {
            let mut buffer = normalized.clone();
            let visited = collect_words(node, &mut buffer, limit, &mut words);
            tracing::trace!(prefix = %normalized, visited, "Prefix subtree walked");
        }

        tracing::debug!(
            prefix = %normalized,
            limit,
            found = words.len(),
            "Prefix query computed"
        );
        self.cache.store(normalized, &words, limit);
        words
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the query cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Walks and extends the tree along an already normalized word.
    fn insert_normalized(&mut self, word: &str) -> PrefixIndexResult<bool> {
        if word.is_empty() {
            return Err(PrefixIndexError::EmptyWord);
        }
        if let Some(max_len) = self.config.max_word_len {
            if word.chars().count() > max_len {
                return Err(PrefixIndexError::WordTooLong {
                    word: word.to_string(),
                    max_len,
                });
            }
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        if is_new {
            self.word_count += 1;
        }
        Ok(is_new)
    }

    fn invalidate_cache(&mut self) {
        let dropped = self.cache.len();
        self.cache.invalidate();
        tracing::debug!(dropped, "Query cache invalidated");
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-folds input the same way for insertion, lookup and queries.
fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Depth-first enumeration in sorted character order, stopping at `limit`.
///
/// `word` holds the characters from the root to `node`. The walk uses an
/// explicit stack so word length does not bound the call stack. Returns the
/// number of nodes visited.
fn collect_words(
    node: &TrieNode,
    word: &mut String,
    limit: usize,
    out: &mut Vec<String>,
) -> usize {
    // (node, length of `word` at its parent, edge from the parent)
    let mut stack: Vec<(&TrieNode, usize, Option<char>)> = vec![(node, word.len(), None)];
    let mut visited = 0;

    while out.len() < limit {
        let Some((node, parent_len, edge)) = stack.pop() else {
            break;
        };
        visited += 1;

        word.truncate(parent_len);
        if let Some(c) = edge {
            word.push(c);
        }
        if node.is_terminal {
            out.push(word.clone());
            if out.len() >= limit {
                break;
            }
        }

        // Reversed so the smallest character is popped first
        let len = word.len();
        stack.extend(
            node.sorted_children()
                .into_iter()
                .rev()
                .map(|(c, child)| (child, len, Some(c))),
        );
    }

    visited
}
