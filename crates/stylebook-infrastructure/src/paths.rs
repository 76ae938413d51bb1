//! Unified path management for stylebook files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/stylebook/         # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/stylebook/    # Data directory
//! └── store/                   # Key-value store (one JSON file per key)
//! ```

use std::path::PathBuf;

use thiserror::Error;

const APP_DIR: &str = "stylebook";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform directory could not be determined.
    #[error("Cannot find {0} directory")]
    DirNotFound(&'static str),
}

/// Platform paths for stylebook.
pub struct StylebookPaths;

impl StylebookPaths {
    /// Returns the stylebook configuration directory (e.g. `~/.config/stylebook/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DirNotFound("config"))
    }

    /// Returns the stylebook data directory (e.g. `~/.local/share/stylebook/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DirNotFound("data"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default key-value store directory.
    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_nest_under_app_dir() {
        if let Ok(file) = StylebookPaths::config_file() {
            assert!(file.ends_with("stylebook/config.toml"));
        }
        if let Ok(dir) = StylebookPaths::store_dir() {
            assert!(dir.ends_with("stylebook/store"));
        }
    }
}
