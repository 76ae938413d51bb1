use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use stylebook_application::BrowsingHistoryService;
use stylebook_core::config::StylebookConfig;
use stylebook_core::style::StyleRepository;
use stylebook_infrastructure::{ConfigService, InMemoryStyleRepository};

/// Global options shared by every command.
pub struct ContextOptions {
    pub config: Option<PathBuf>,
    pub scope: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl ContextOptions {
    /// Loads the config file and applies command-line overrides.
    pub fn load_config(&self) -> Result<StylebookConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigService::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ConfigService::load_default().context("Failed to load config")?,
        };
        if let Some(scope) = &self.scope {
            config.history.scope = Some(scope.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        tracing::debug!("[CLI] Effective config: {:?}", config);
        Ok(config)
    }

    pub fn history(&self, config: &StylebookConfig) -> Result<BrowsingHistoryService> {
        let store = ConfigService::open_store(config).context("Failed to open history store")?;
        Ok(BrowsingHistoryService::new(Arc::new(store), &config.history))
    }
}

pub fn open_catalog(path: &Path) -> Result<Arc<dyn StyleRepository>> {
    let repository = InMemoryStyleRepository::from_file(path)
        .with_context(|| format!("Failed to load style catalog {}", path.display()))?;
    Ok(Arc::new(repository))
}
