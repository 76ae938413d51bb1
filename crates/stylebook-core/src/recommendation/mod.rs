//! Style recommendations from browsing history.

mod engine;

pub use engine::{DEFAULT_RECOMMENDATION_LIMIT, ScoredStyle, recommend, recommend_scored};
