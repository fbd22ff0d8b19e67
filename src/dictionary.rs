//! Word list loading.
//!
//! A word list is UTF-8 text with one word per line. Lines are trimmed;
//! blank lines and comment lines are skipped. Validation of the words
//! themselves is left to the prefix index.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LaniError, LaniResult};

/// Reads words from `reader`, one per line.
///
/// # Arguments
///
/// * `reader` - Source of the word list
/// * `comment_prefix` - Lines starting with this (after trimming) are ignored
pub fn read_words<R: BufRead>(reader: R, comment_prefix: &str) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with(comment_prefix) {
            continue;
        }
        words.push(word.to_string());
    }
    Ok(words)
}

/// Loads a word list from a file.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words in file order
/// * `Err(LaniError::Dictionary)` - If the file is missing or unreadable
pub fn load_word_list<P: AsRef<Path>>(path: P, comment_prefix: &str) -> LaniResult<Vec<String>> {
    let path = path.as_ref();
    let to_error = |source| LaniError::Dictionary {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let words = read_words(BufReader::new(file), comment_prefix).map_err(to_error)?;

    tracing::debug!(path = ?path, words = words.len(), "Word list read");
    Ok(words)
}
