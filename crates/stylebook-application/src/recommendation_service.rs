//! History-aware recommendations over the style catalog.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use stylebook_core::recommendation::recommend_scored;
use stylebook_core::style::{Style, StyleRepository};

use crate::history_service::BrowsingHistoryService;

/// A recommended style; `score` is absent for unpersonalized results.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub style: Style,
    pub score: Option<f64>,
}

pub struct RecommendationService {
    repository: Arc<dyn StyleRepository>,
    history: BrowsingHistoryService,
    default_limit: usize,
}

impl RecommendationService {
    pub fn new(
        repository: Arc<dyn StyleRepository>,
        history: BrowsingHistoryService,
        default_limit: usize,
    ) -> Self {
        Self {
            repository,
            history,
            default_limit,
        }
    }

    /// Recommends up to `limit` styles (the configured default when `None`).
    pub fn recommend(&self, limit: Option<usize>) -> Result<Vec<Recommendation>> {
        let styles = self.repository.get_all()?;
        let history = self.history.get_history();
        let limit = limit.unwrap_or(self.default_limit);

        let recommendations: Vec<Recommendation> = recommend_scored(&styles, &history, limit)
            .into_iter()
            .map(|scored| Recommendation {
                style: scored.style.clone(),
                score: scored.score,
            })
            .collect();

        tracing::debug!(
            "[Recommend] {} recommendations from {} styles and {} history items",
            recommendations.len(),
            styles.len(),
            history.len()
        );
        Ok(recommendations)
    }
}
