//! Style repository trait.

use super::model::Style;
use crate::error::Result;

/// Repository for style persistence.
///
/// Implementations own their storage; nothing about styles lives in
/// process-wide state.
pub trait StyleRepository: Send + Sync {
    /// Returns all styles in catalog order.
    fn get_all(&self) -> Result<Vec<Style>>;

    /// Finds a style by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Style))`: Style found
    /// - `Ok(None)`: Style not found
    /// - `Err(_)`: Error occurred during retrieval
    fn find_by_id(&self, id: &str) -> Result<Option<Style>>;

    /// Inserts a style, or replaces the one with the same ID in place.
    fn save(&self, style: Style) -> Result<()>;

    /// Deletes a style by its ID.
    fn delete(&self, id: &str) -> Result<()>;
}
