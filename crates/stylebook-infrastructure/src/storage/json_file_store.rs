//! File-backed key-value store.
//!
//! Each key maps to one JSON file inside the store directory:
//! `{store_dir}/{encoded key}.json`.

use std::path::{Path, PathBuf};

use stylebook_core::error::Result;
use stylebook_core::history::KeyValueStore;

use super::atomic_file::{read_optional, remove_if_exists, update_atomic, write_atomic};
use crate::paths::StylebookPaths;

/// Key-value store persisting each blob to its own file.
pub struct JsonFileKeyValueStore {
    base_dir: PathBuf,
}

impl JsonFileKeyValueStore {
    /// Creates a store in the platform data directory.
    pub fn new() -> Result<Self> {
        let base_dir = StylebookPaths::store_dir()
            .map_err(|e| stylebook_core::StylebookError::config(e.to_string()))?;
        Ok(Self::with_base_dir(base_dir))
    }

    /// Creates a store in a custom directory (for configuration and testing).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", encode_key(key)))
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        tracing::debug!("[Store] Reading {} from {:?}", key, path);
        read_optional(&path)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        tracing::debug!("[Store] Writing {} to {:?}", key, path);
        write_atomic(&path, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        remove_if_exists(&self.path_for(key))
    }

    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<String>) -> Result<String>,
    ) -> Result<()> {
        let path = self.path_for(key);
        tracing::debug!("[Store] Updating {} in {:?}", key, path);
        update_atomic(&path, f)
    }
}

/// Maps a key to a file stem. Characters outside `[A-Za-z0-9.-]` are
/// percent-encoded byte by byte, so distinct keys never share a file.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'-' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}
