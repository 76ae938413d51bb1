//! Side-by-side comparison of two styles.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use serde::Serialize;
use stylebook_core::style::{
    SimilarityBreakdown, Style, StyleFeatures, StyleRepository, score_features,
};
use stylebook_core::token::{
    DiffGroup, DiffSummary, TokenDiffEntry, TokenGroup, diff, group_by_category,
};

/// Diff of two token trees with its presentation views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenComparison {
    pub entries: Vec<TokenDiffEntry>,
    pub groups: Vec<DiffGroup>,
    pub summary: DiffSummary,
}

impl TokenComparison {
    pub fn between(left: &TokenGroup, right: &TokenGroup) -> Self {
        let entries = diff(left, right);
        Self {
            groups: group_by_category(&entries),
            summary: DiffSummary::from_entries(&entries),
            entries,
        }
    }
}

/// Identity of a compared style.
#[derive(Debug, Clone, Serialize)]
pub struct StyleRef {
    pub id: String,
    pub name: String,
}

impl From<&Style> for StyleRef {
    fn from(style: &Style) -> Self {
        Self {
            id: style.id.clone(),
            name: style.name.clone(),
        }
    }
}

/// Full comparison of two styles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleComparison {
    pub left: StyleRef,
    pub right: StyleRef,
    pub tokens: TokenComparison,
    pub similarity: SimilarityBreakdown,
}

impl StyleComparison {
    pub fn between(left: &Style, right: &Style) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            tokens: TokenComparison::between(&left.tokens, &right.tokens),
            similarity: score_features(&StyleFeatures::of(left), &StyleFeatures::of(right)),
        }
    }
}

/// Compares catalog styles by ID.
pub struct ComparisonService {
    repository: Arc<dyn StyleRepository>,
}

impl ComparisonService {
    pub fn new(repository: Arc<dyn StyleRepository>) -> Self {
        Self { repository }
    }

    /// Compares the styles `left_id` and `right_id`.
    ///
    /// Both styles must exist; the diff itself never fails.
    pub fn compare(&self, left_id: &str, right_id: &str) -> Result<StyleComparison> {
        let left = self.find(left_id)?;
        let right = self.find(right_id)?;
        tracing::debug!("[Compare] {} vs {}", left.id, right.id);
        Ok(StyleComparison::between(&left, &right))
    }

    fn find(&self, id: &str) -> Result<Style> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| anyhow!("Style not found: {}", id))
    }
}
