//! Configuration loading.
//!
//! Reads `config.toml` into a [`StylebookConfig`]. A missing file yields the
//! defaults; a file that does not parse is a TOML serialization error.

use std::path::Path;

use stylebook_core::config::StylebookConfig;
use stylebook_core::error::{Result, StylebookError};

use crate::paths::StylebookPaths;
use crate::storage::JsonFileKeyValueStore;

pub struct ConfigService;

impl ConfigService {
    /// Loads the configuration from the platform config file.
    pub fn load_default() -> Result<StylebookConfig> {
        let path =
            StylebookPaths::config_file().map_err(|e| StylebookError::config(e.to_string()))?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<StylebookConfig> {
        if !path.exists() {
            tracing::debug!("[Config] No config at {:?}, using defaults", path);
            return Ok(StylebookConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: StylebookConfig = toml::from_str(&content)
            .inspect_err(|e| tracing::warn!("[Config] Failed to parse {:?}: {}", path, e))?;

        if config.history.max_entries == 0 {
            return Err(StylebookError::config("history.max_entries must be at least 1"));
        }

        tracing::info!("[Config] Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Writes `config` to `path` as TOML.
    pub fn save_to(path: &Path, config: &StylebookConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(config)?)?;
        Ok(())
    }

    /// Opens the key-value store the configuration points at.
    pub fn open_store(config: &StylebookConfig) -> Result<JsonFileKeyValueStore> {
        match &config.storage.data_dir {
            Some(dir) => Ok(JsonFileKeyValueStore::with_base_dir(dir.clone())),
            None => JsonFileKeyValueStore::new(),
        }
    }
}
