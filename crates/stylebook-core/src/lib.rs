//! Domain core of Stylebook: design-token trees, their diff, style
//! similarity and history-driven recommendations.
//!
//! Everything here except the store traits is pure and synchronous.

pub mod config;
pub mod error;
pub mod history;
pub mod recommendation;
pub mod style;
pub mod token;

// Re-export common error type
pub use error::{Result, StylebookError};
