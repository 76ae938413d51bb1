//! Browsing history service.
//!
//! Records style views through a [`KeyValueStore`] and reads them back.
//! Storage problems never reach the caller: a failed read is an empty
//! history and a failed write loses only that one view.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use stylebook_core::config::HistorySettings;
use stylebook_core::history::{BrowsingHistory, BrowsingHistoryItem, KeyValueStore, history_key};

/// Tracks which styles a user (or session) has viewed.
#[derive(Clone)]
pub struct BrowsingHistoryService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    max_entries: usize,
}

impl BrowsingHistoryService {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: &HistorySettings) -> Self {
        Self {
            store,
            key: history_key(settings.scope.as_deref()),
            max_entries: settings.max_entries,
        }
    }

    /// Storage key this service reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Records a view of `style_id` now.
    pub fn track_view(&self, style_id: &str) {
        self.track_view_at(style_id, Utc::now());
    }

    /// Records a view of `style_id` at `viewed_at`.
    ///
    /// The stored history is read and rewritten as one store update, so
    /// concurrent views are all kept.
    pub fn track_view_at(&self, style_id: &str, viewed_at: DateTime<Utc>) {
        let result = self.store.update(&self.key, &mut |current| {
            let mut history = self.parse(current.as_deref());
            history.record(style_id, viewed_at);
            Ok(serde_json::to_string(history.items())?)
        });
        match result {
            Ok(()) => tracing::debug!("[History] Tracked view of {}", style_id),
            Err(e) => tracing::warn!("[History] Failed to persist view of {}: {}", style_id, e),
        }
    }

    /// Viewed styles, most recent first.
    pub fn get_history(&self) -> Vec<BrowsingHistoryItem> {
        self.load().into_items()
    }

    /// Forgets every recorded view.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!("[History] Failed to clear history: {}", e);
        }
    }

    fn load(&self) -> BrowsingHistory {
        match self.store.get(&self.key) {
            Ok(blob) => self.parse(blob.as_deref()),
            Err(e) => {
                tracing::warn!("[History] Failed to read history: {}", e);
                BrowsingHistory::new(self.max_entries)
            }
        }
    }

    /// Decodes a stored blob; a missing or unreadable blob is an empty history.
    fn parse(&self, blob: Option<&str>) -> BrowsingHistory {
        let Some(blob) = blob else {
            return BrowsingHistory::new(self.max_entries);
        };
        match serde_json::from_str::<Vec<BrowsingHistoryItem>>(blob) {
            Ok(items) => BrowsingHistory::from_items(items, self.max_entries),
            Err(e) => {
                tracing::warn!("[History] Ignoring unreadable history: {}", e);
                BrowsingHistory::new(self.max_entries)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylebook_core::error::{Result, StylebookError};
    use stylebook_infrastructure::InMemoryKeyValueStore;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StylebookError::io("disk unplugged"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StylebookError::io("disk unplugged"))
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(StylebookError::io("disk unplugged"))
        }

        fn update(
            &self,
            _key: &str,
            _f: &mut dyn FnMut(Option<String>) -> Result<String>,
        ) -> Result<()> {
            Err(StylebookError::io("disk unplugged"))
        }
    }

    fn service(store: Arc<dyn KeyValueStore>) -> BrowsingHistoryService {
        BrowsingHistoryService::new(store, &HistorySettings::default())
    }

    fn ids(items: &[BrowsingHistoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.style_id.as_str()).collect()
    }

    #[test]
    fn test_track_and_get() {
        let history = service(Arc::new(InMemoryKeyValueStore::new()));
        assert!(history.get_history().is_empty());

        history.track_view("clay");
        history.track_view("chrome");
        history.track_view("clay");

        assert_eq!(ids(&history.get_history()), vec!["clay", "chrome"]);
    }

    #[test]
    fn test_bounded_to_twenty() {
        let history = service(Arc::new(InMemoryKeyValueStore::new()));
        for i in 0..30 {
            history.track_view(&format!("style-{i}"));
        }

        let items = history.get_history();
        assert_eq!(items.len(), 20);
        assert_eq!(items[0].style_id, "style-29");
        assert_eq!(items[19].style_id, "style-10");
    }

    #[test]
    fn test_broken_store_degrades() {
        let history = service(Arc::new(BrokenStore));
        history.track_view("clay");
        assert!(history.get_history().is_empty());
        history.clear();
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty_and_is_overwritten() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set("stylebook.browsing-history", "not json").unwrap();

        let history = service(store.clone());
        assert!(history.get_history().is_empty());

        history.track_view("neon");
        assert_eq!(ids(&history.get_history()), vec!["neon"]);
    }

    #[test]
    fn test_scopes_are_isolated() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let alice = BrowsingHistoryService::new(
            store.clone(),
            &HistorySettings {
                scope: Some("alice".into()),
                ..HistorySettings::default()
            },
        );
        let bob = BrowsingHistoryService::new(
            store,
            &HistorySettings {
                scope: Some("bob".into()),
                ..HistorySettings::default()
            },
        );

        alice.track_view("clay");
        assert_eq!(alice.key(), "stylebook.browsing-history:alice");
        assert_eq!(alice.get_history().len(), 1);
        assert!(bob.get_history().is_empty());
    }

    #[test]
    fn test_clear() {
        let history = service(Arc::new(InMemoryKeyValueStore::new()));
        history.track_view("clay");
        history.clear();
        assert!(history.get_history().is_empty());
    }

    #[test]
    fn test_concurrent_views_are_all_kept() {
        let history = service(Arc::new(InMemoryKeyValueStore::new()));

        std::thread::scope(|scope| {
            for i in 0..16 {
                let history = &history;
                scope.spawn(move || history.track_view(&format!("style-{i}")));
            }
        });

        assert_eq!(history.get_history().len(), 16);
    }
}
