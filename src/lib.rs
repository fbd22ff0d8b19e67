//! Lani Autocomplete Library
//!
//! An in-memory autocomplete index: given a dictionary of words, it answers
//! "which words start with this prefix?" quickly enough to run on every
//! keystroke.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_index`]: the prefix tree and its query cache
//! - [`autocomplete`]: the owned engine a presentation layer holds
//! - [`dictionary`]: word list parsing
//! - [`config`] and [`error`]: layered configuration and the error taxonomy

pub mod autocomplete;
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use autocomplete::Autocomplete;

/// Version information for Lani Autocomplete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
