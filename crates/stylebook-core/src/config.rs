//! Application configuration model.
//!
//! Loaded from `config.toml`; every field has a default so a missing or
//! partial file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_MAX_HISTORY_ENTRIES;
use crate::recommendation::DEFAULT_RECOMMENDATION_LIMIT;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StylebookConfig {
    pub history: HistorySettings,
    pub recommendation: RecommendationSettings,
    pub storage: StorageSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of remembered views
    pub max_entries: usize,
    /// Optional per-user/session scope for the history key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_HISTORY_ENTRIES,
            scope: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RecommendationSettings {
    /// Default number of recommendations
    pub limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for the key-value store; platform data dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
