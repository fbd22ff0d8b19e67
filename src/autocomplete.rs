//! Autocomplete engine facade.
//!
//! [`Autocomplete`] is the instance a presentation layer owns: it wraps a
//! [`PrefixIndex`], remembers the default suggestion count and knows how to
//! fill itself from the configured word list. It is constructed explicitly
//! and passed around by the caller; there is no global instance.

use std::path::Path;

use crate::config::index::IndexConfig;
use crate::config::LaniConfig;
use crate::data_structures::prefix_index::{BulkLoadReport, PrefixIndex, PrefixIndexConfig};
use crate::dictionary;
use crate::error::LaniResult;

/// Owned autocomplete engine.
#[derive(Debug)]
pub struct Autocomplete {
    index: PrefixIndex,
    default_limit: usize,
    comment_prefix: String,
}

impl Autocomplete {
    /// Creates an engine with an empty index.
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            index: PrefixIndex::with_config(PrefixIndexConfig::from(config)),
            default_limit: config.default_limit,
            comment_prefix: "#".to_string(),
        }
    }

    /// Creates an engine and loads the configured word list, if any.
    pub fn from_config(config: &LaniConfig) -> LaniResult<Self> {
        let mut engine = Self::new(&config.index);
        engine.comment_prefix = config.dictionary.comment_prefix.clone();

        if let Some(path) = &config.dictionary.path {
            engine.load_dictionary(path)?;
        } else {
            tracing::info!("No dictionary configured, starting with an empty index");
        }

        Ok(engine)
    }

    /// Inserts every word from `words`. See [`PrefixIndex::bulk_load`].
    pub fn load_words<I, W>(&mut self, words: I) -> BulkLoadReport
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.index.bulk_load(words)
    }

    /// Reads a word list file and inserts its words.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> LaniResult<BulkLoadReport> {
        let path = path.as_ref();
        let words = dictionary::load_word_list(path, &self.comment_prefix)?;
        let report = self.index.bulk_load(&words);
        tracing::info!(path = ?path, words = self.index.len(), "Dictionary loaded");
        Ok(report)
    }

    /// Suggestions for `prefix` using the default limit.
    pub fn search(&mut self, prefix: &str) -> Vec<String> {
        self.index.prefix_query(prefix, self.default_limit)
    }

    /// Suggestions for `prefix`, at most `limit` of them.
    pub fn search_with_limit(&mut self, prefix: &str, limit: usize) -> Vec<String> {
        self.index.prefix_query(prefix, limit)
    }

    /// Adds a single word, e.g. one the user just typed.
    ///
    /// Returns `true` if the word was new.
    pub fn add_word(&mut self, word: &str) -> LaniResult<bool> {
        Ok(self.index.insert(word)?)
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Number of suggestions [`search`](Self::search) returns.
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// The underlying index, for statistics.
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }
}
