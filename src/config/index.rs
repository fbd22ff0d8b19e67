//! Prefix index configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_index::PrefixIndexConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Prefix index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Number of suggestions returned when the caller gives no limit
    pub default_limit: usize,

    /// Longest word, in characters, the index accepts. Unset means no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_word_len: Option<usize>,

    /// Whether prefix query results are cached
    pub cache_enabled: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            default_limit: 8,
            max_word_len: None,
            cache_enabled: true,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.default_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.max_word_len == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl From<&IndexConfig> for PrefixIndexConfig {
    fn from(config: &IndexConfig) -> Self {
        Self {
            max_word_len: config.max_word_len,
            cache_enabled: config.cache_enabled,
        }
    }
}
