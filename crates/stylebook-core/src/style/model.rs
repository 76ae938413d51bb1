//! Style domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::token::TokenGroup;

/// Prompt metadata handed to the downstream image generator.
///
/// Opaque to the comparison and recommendation algorithms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// A named bundle of a token tree, description and prompt metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Unique style identifier
    pub id: String,
    pub name: String,
    /// Free-text description, used for keyword overlap
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tokens: TokenGroup,
    #[serde(default)]
    pub metadata: PromptMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Style {
    /// Creates a style with a fresh UUID and the current timestamp.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tokens: TokenGroup,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            tokens,
            metadata: PromptMetadata::default(),
            created_at: Some(Utc::now()),
        }
    }

    /// Replaces the generated identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_metadata(mut self, metadata: PromptMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
