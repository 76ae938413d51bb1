//! Style repositories.
//!
//! The in-memory repository is an explicit store object: it is constructed
//! with its initial contents and dropped with its owner.

use std::path::Path;
use std::sync::RwLock;

use serde::Deserialize;
use stylebook_core::error::{Result, StylebookError};
use stylebook_core::style::{Style, StyleRepository};

/// Style repository held in memory, preserving catalog order.
#[derive(Debug, Default)]
pub struct InMemoryStyleRepository {
    styles: RwLock<Vec<Style>>,
}

impl InMemoryStyleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `styles`.
    pub fn with_styles(styles: Vec<Style>) -> Self {
        Self {
            styles: RwLock::new(styles),
        }
    }

    /// Creates a repository seeded from a JSON catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::with_styles(load_styles(path)?))
    }

    fn poisoned(e: impl std::fmt::Display) -> StylebookError {
        StylebookError::data_access(format!("Style store lock poisoned: {}", e))
    }
}

impl StyleRepository for InMemoryStyleRepository {
    fn get_all(&self) -> Result<Vec<Style>> {
        Ok(self.styles.read().map_err(Self::poisoned)?.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Style>> {
        let styles = self.styles.read().map_err(Self::poisoned)?;
        Ok(styles.iter().find(|s| s.id == id).cloned())
    }

    fn save(&self, style: Style) -> Result<()> {
        let mut styles = self.styles.write().map_err(Self::poisoned)?;
        match styles.iter_mut().find(|s| s.id == style.id) {
            Some(existing) => *existing = style,
            None => styles.push(style),
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut styles = self.styles.write().map_err(Self::poisoned)?;
        let before = styles.len();
        styles.retain(|s| s.id != id);
        if styles.len() == before {
            return Err(StylebookError::not_found("style", id));
        }
        Ok(())
    }
}

/// A catalog file is either a bare array of styles or `{ "styles": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Style>),
    Wrapped { styles: Vec<Style> },
}

/// Reads a JSON style catalog.
pub fn load_styles(path: &Path) -> Result<Vec<Style>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| StylebookError::io(format!("Failed to read {}: {}", path.display(), e)))?;
    let catalog: CatalogFile = serde_json::from_str(&content)?;
    let styles = match catalog {
        CatalogFile::Bare(styles) | CatalogFile::Wrapped { styles } => styles,
    };
    tracing::debug!("[Catalog] Loaded {} styles from {:?}", styles.len(), path);
    Ok(styles)
}
