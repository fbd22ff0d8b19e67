// Copyright (c) 2025 Lani Autocomplete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix index.
//!
//! Only insertion can fail. Lookups and prefix queries are total over strings.

/// Errors that can occur when adding words to a [`PrefixIndex`](super::PrefixIndex).
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixIndexError {
    /// The word was empty after normalization.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word has more characters than the index accepts.
    #[error("Word '{word}' exceeds maximum length of {max_len} characters")]
    WordTooLong {
        /// The normalized word that was rejected.
        word: String,
        /// The configured maximum length.
        max_len: usize,
    },
}

/// Result type for prefix index operations.
pub type PrefixIndexResult<T> = Result<T, PrefixIndexError>;
