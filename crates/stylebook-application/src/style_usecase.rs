//! Style browsing use case.
//!
//! Viewing a style records it in the browsing history; exporting renders its
//! token tree for copy or download.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use stylebook_core::style::{Style, StyleRepository};
use stylebook_core::token::{export_flattened, export_tree};

use crate::history_service::BrowsingHistoryService;

/// Shape of a token export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The token tree as authored.
    #[default]
    Tree,
    /// Dotted path to value.
    Flattened,
}

pub struct StyleUseCase {
    repository: Arc<dyn StyleRepository>,
    history: BrowsingHistoryService,
}

impl StyleUseCase {
    pub fn new(repository: Arc<dyn StyleRepository>, history: BrowsingHistoryService) -> Self {
        Self {
            repository,
            history,
        }
    }

    /// All styles in catalog order.
    pub fn list_styles(&self) -> Result<Vec<Style>> {
        Ok(self.repository.get_all()?)
    }

    /// Returns a style and records the view.
    pub fn view_style(&self, id: &str) -> Result<Style> {
        let style = self.find(id)?;
        self.history.track_view(&style.id);
        tracing::info!("[Style] Viewed {} ({})", style.name, style.id);
        Ok(style)
    }

    /// Exports a style's tokens as pretty-printed JSON.
    pub fn export_tokens(&self, id: &str, format: ExportFormat) -> Result<String> {
        let style = self.find(id)?;
        let exported = match format {
            ExportFormat::Tree => export_tree(&style.tokens),
            ExportFormat::Flattened => export_flattened(&style.tokens),
        };
        exported.with_context(|| format!("Failed to export tokens of {}", id))
    }

    fn find(&self, id: &str) -> Result<Style> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| anyhow!("Style not found: {}", id))
    }
}
