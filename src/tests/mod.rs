//! Test modules for Lani Autocomplete.
//!
//! This module contains crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - End-to-end autocomplete scenarios
//! - Shared fixtures and proptest strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{dictionary_strategy, TestFixture};
