//! Style similarity scoring.
//!
//! A heuristic score in `[0, 100]` built from three independent parts:
//!
//! | part        | weight | measure                                              |
//! |-------------|--------|------------------------------------------------------|
//! | color       | 30     | shared colors / larger color set                     |
//! | font        | 20     | shared primary fonts / larger font set               |
//! | description | 50     | shared words longer than 3 chars / longer word list |
//!
//! A part with nothing to compare on either side contributes zero; the
//! remaining weights are not renormalized.

use std::collections::BTreeSet;

use serde::Serialize;

use super::model::Style;
use crate::token::{extract_colors, extract_fonts};

pub const COLOR_WEIGHT: f64 = 30.0;
pub const FONT_WEIGHT: f64 = 20.0;
pub const DESCRIPTION_WEIGHT: f64 = 50.0;
pub const MAX_SCORE: f64 = 100.0;

/// Words this short are ignored when counting shared description words.
const MIN_KEYWORD_CHARS: usize = 4;

/// The comparable features of one style, extracted once and reused across
/// many comparisons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleFeatures {
    pub colors: BTreeSet<String>,
    pub fonts: BTreeSet<String>,
    /// Lower-cased description words, repeats kept.
    pub words: Vec<String>,
}

impl StyleFeatures {
    pub fn of(style: &Style) -> Self {
        Self {
            colors: extract_colors(&style.tokens),
            fonts: extract_fonts(&style.tokens),
            words: description_words(&style.description),
        }
    }
}

/// Per-part contributions of a similarity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityBreakdown {
    pub color: f64,
    pub font: f64,
    pub description: f64,
    pub total: f64,
}

/// Similarity of two styles in `[0, 100]`.
pub fn similarity(a: &Style, b: &Style) -> f64 {
    score_features(&StyleFeatures::of(a), &StyleFeatures::of(b)).total
}

/// Scores two pre-extracted feature sets.
pub fn score_features(a: &StyleFeatures, b: &StyleFeatures) -> SimilarityBreakdown {
    let color = overlap_ratio(&a.colors, &b.colors) * COLOR_WEIGHT;
    let font = overlap_ratio(&a.fonts, &b.fonts) * FONT_WEIGHT;
    let description = description_overlap(&a.words, &b.words);

    SimilarityBreakdown {
        color,
        font,
        description,
        total: (color + font + description).min(MAX_SCORE),
    }
}

/// `|a ∩ b| / max(|a|, |b|)`, or zero when either set is empty.
pub fn overlap_ratio(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    shared as f64 / a.len().max(b.len()) as f64
}

/// Weighted description overlap, capped at [`DESCRIPTION_WEIGHT`].
///
/// Counts words of `a` (repeats included) that are longer than three
/// characters and appear anywhere in `b`.
pub fn description_overlap(a: &[String], b: &[String]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    let shared = a
        .iter()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS && b.contains(word))
        .count();
    (shared as f64 / longest as f64 * DESCRIPTION_WEIGHT).min(DESCRIPTION_WEIGHT)
}

/// Splits a description on whitespace and lower-cases every word.
pub fn description_words(description: &str) -> Vec<String> {
    description
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
