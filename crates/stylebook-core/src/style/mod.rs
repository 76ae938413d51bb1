//! Styles and how alike they are.

mod model;
mod repository;
pub mod similarity;

pub use model::{PromptMetadata, Style};
pub use repository::StyleRepository;
pub use similarity::{SimilarityBreakdown, StyleFeatures, score_features, similarity};
