//! History-driven style recommendation.
//!
//! Unviewed styles are ranked by their mean similarity to every viewed style.
//! Without usable history the catalog order is returned as-is.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::history::BrowsingHistoryItem;
use crate::style::{Style, StyleFeatures, score_features};

/// Number of recommendations returned unless configured otherwise.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// A recommended style with the score it was ranked by.
///
/// `score` is `None` when the result is an unpersonalized fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredStyle<'a> {
    pub style: &'a Style,
    pub score: Option<f64>,
}

/// Ranks styles for a user with the given browsing history.
pub fn recommend<'a>(
    all_styles: &'a [Style],
    history: &[BrowsingHistoryItem],
    limit: usize,
) -> Vec<&'a Style> {
    recommend_scored(all_styles, history, limit)
        .into_iter()
        .map(|scored| scored.style)
        .collect()
}

/// Like [`recommend`], keeping the mean similarity of each result.
pub fn recommend_scored<'a>(
    all_styles: &'a [Style],
    history: &[BrowsingHistoryItem],
    limit: usize,
) -> Vec<ScoredStyle<'a>> {
    if all_styles.is_empty() {
        return Vec::new();
    }
    if history.is_empty() {
        return cold_start(all_styles, limit);
    }

    let viewed_ids: HashSet<&str> = history.iter().map(|item| item.style_id.as_str()).collect();
    let (viewed, unviewed): (Vec<&Style>, Vec<&Style>) = all_styles
        .iter()
        .partition(|style| viewed_ids.contains(style.id.as_str()));

    // History only references styles that no longer exist.
    if viewed.is_empty() {
        return cold_start(all_styles, limit);
    }

    let viewed_features: Vec<StyleFeatures> = viewed.iter().map(|s| StyleFeatures::of(s)).collect();

    let mut scored: Vec<ScoredStyle<'a>> = unviewed
        .into_iter()
        .map(|style| {
            let features = StyleFeatures::of(style);
            let total: f64 = viewed_features
                .iter()
                .map(|v| score_features(&features, v).total)
                .sum();
            ScoredStyle {
                style,
                score: Some(total / viewed_features.len() as f64),
            }
        })
        .collect();

    // sort_by is stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored
}

fn cold_start(all_styles: &[Style], limit: usize) -> Vec<ScoredStyle<'_>> {
    all_styles
        .iter()
        .take(limit)
        .map(|style| ScoredStyle { style, score: None })
        .collect()
}
