//! Data structures for Lani Autocomplete.
//!
//! This module contains the in-memory structures behind suggestion lookup.
//! All implementations are single-threaded and free of unsafe code.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, PrefixIndexError, PrefixIndexResult};
