//! Dictionary configuration module.
//!
//! Describes where the startup word list comes from and how it is parsed.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Word list loaded at startup (None starts with an empty index)
    pub path: Option<PathBuf>,

    /// Lines starting with this prefix are skipped
    pub comment_prefix: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            comment_prefix: "#".to_string(),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        // An empty prefix would mark every line as a comment
        if self.comment_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary.comment_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
