//! Key-value persistence capability.

use crate::error::Result;

/// Base key the browsing history is stored under.
pub const HISTORY_KEY: &str = "stylebook.browsing-history";

/// Storage key for a (possibly scoped) browsing history.
///
/// Scopes separate histories per user or session.
pub fn history_key(scope: Option<&str>) -> String {
    match scope {
        Some(scope) if !scope.is_empty() => format!("{HISTORY_KEY}:{scope}"),
        _ => HISTORY_KEY.to_string(),
    }
}

/// A keyed store of JSON blobs.
pub trait KeyValueStore: Send + Sync {
    /// Reads the blob stored under `key`, `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the blob under `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<()>;

    /// Replaces the blob under `key` with `f(current)` as one atomic step.
    ///
    /// Concurrent updates of the same key are applied one after another, each
    /// seeing the previous one's result. When `f` fails nothing is written.
    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<String>) -> Result<String>,
    ) -> Result<()>;
}
