//! Application layer for Stylebook.
//!
//! Use cases that wire the pure core to storage: browsing history,
//! style comparison, recommendations and style viewing/export.

pub mod comparison_service;
pub mod history_service;
pub mod recommendation_service;
pub mod style_usecase;

pub use comparison_service::{ComparisonService, StyleComparison, TokenComparison};
pub use history_service::BrowsingHistoryService;
pub use recommendation_service::{Recommendation, RecommendationService};
pub use style_usecase::{ExportFormat, StyleUseCase};
