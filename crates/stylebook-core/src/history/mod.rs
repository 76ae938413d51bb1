//! Browsing history value types and the store capability they persist through.

mod model;
mod store;

pub use model::{BrowsingHistory, BrowsingHistoryItem, DEFAULT_MAX_HISTORY_ENTRIES};
pub use store::{HISTORY_KEY, KeyValueStore, history_key};
