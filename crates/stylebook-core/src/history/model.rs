//! Browsing history domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept unless configured otherwise.
pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 20;

/// One viewed style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowsingHistoryItem {
    pub style_id: String,
    /// Serialized as Unix milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub viewed_at: DateTime<Utc>,
}

/// Recency log of viewed styles, most recent first.
///
/// Holds at most one entry per style and at most `max_entries` entries;
/// the oldest entries are evicted first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsingHistory {
    items: Vec<BrowsingHistoryItem>,
    max_entries: usize,
}

impl Default for BrowsingHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY_ENTRIES)
    }
}

impl BrowsingHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            items: Vec::new(),
            max_entries,
        }
    }

    /// Builds a history from stored items, restoring the invariants.
    ///
    /// Later duplicates of a style are dropped and the list is truncated, so a
    /// hand-edited or stale blob still yields a valid history.
    pub fn from_items(items: Vec<BrowsingHistoryItem>, max_entries: usize) -> Self {
        let mut history = Self::new(max_entries);
        for item in items {
            if !history.contains(&item.style_id) {
                history.items.push(item);
            }
        }
        history.items.truncate(max_entries);
        history
    }

    /// Moves `style_id` to the front with the given view time.
    pub fn record(&mut self, style_id: impl Into<String>, viewed_at: DateTime<Utc>) {
        let style_id = style_id.into();
        self.items.retain(|item| item.style_id != style_id);
        self.items.insert(
            0,
            BrowsingHistoryItem {
                style_id,
                viewed_at,
            },
        );
        self.items.truncate(self.max_entries);
    }

    pub fn contains(&self, style_id: &str) -> bool {
        self.items.iter().any(|item| item.style_id == style_id)
    }

    pub fn items(&self) -> &[BrowsingHistoryItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<BrowsingHistoryItem> {
        self.items
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
