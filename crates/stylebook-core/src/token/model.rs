//! Token tree domain models.
//!
//! A token tree follows the W3C DTCG shape: leaf objects carry `$value`/`$type`
//! and containers are plain nested objects. Parsing classifies every node once
//! into a [`TokenNode`] so traversals never probe for marker keys again.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Marker key holding a token's value.
pub const VALUE_KEY: &str = "$value";
/// Marker key holding a token's type.
pub const TYPE_KEY: &str = "$type";
/// Optional human-readable description of a token.
pub const DESCRIPTION_KEY: &str = "$description";

/// A single design token (a leaf of the tree).
///
/// The raw field map is kept in source order so a parsed tree exports back to
/// the same document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignToken {
    fields: Map<String, Value>,
}

impl DesignToken {
    /// Creates a token with a type and a value.
    pub fn new(token_type: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert(TYPE_KEY.to_string(), Value::String(token_type.into()));
        fields.insert(VALUE_KEY.to_string(), value.into());
        Self { fields }
    }

    /// Creates a token from its raw fields without validating them.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Attaches a `$description`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields.insert(
            DESCRIPTION_KEY.to_string(),
            Value::String(description.into()),
        );
        self
    }

    /// The `$value` field, if present.
    pub fn value(&self) -> Option<&Value> {
        self.fields.get(VALUE_KEY)
    }

    /// The `$type` field, if it is a string.
    pub fn token_type(&self) -> Option<&str> {
        self.fields.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// The `$description` field, if it is a string.
    pub fn description(&self) -> Option<&str> {
        self.fields.get(DESCRIPTION_KEY).and_then(Value::as_str)
    }

    /// The value used for comparison.
    ///
    /// Falls back to the whole token object when `$value` is missing.
    pub fn resolved_value(&self) -> Value {
        match self.value() {
            Some(value) => value.clone(),
            None => Value::Object(self.fields.clone()),
        }
    }

    /// Raw fields in source order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// A node in a token tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum TokenNode {
    /// An object carrying `$value` or `$type`.
    Token(DesignToken),
    /// An object without token markers.
    Group(TokenGroup),
    /// A non-object value sitting directly in a group. Kept as an opaque leaf.
    Literal(Value),
}

impl TokenNode {
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&DesignToken> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl From<Value> for TokenNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) if map.contains_key(VALUE_KEY) || map.contains_key(TYPE_KEY) => {
                Self::Token(DesignToken::from_fields(map))
            }
            Value::Object(map) => Self::Group(TokenGroup::from(map)),
            other => Self::Literal(other),
        }
    }
}

impl From<TokenNode> for Value {
    fn from(node: TokenNode) -> Self {
        match node {
            TokenNode::Token(token) => Value::Object(token.fields),
            TokenNode::Group(group) => Value::from(group),
            TokenNode::Literal(value) => value,
        }
    }
}

impl From<DesignToken> for TokenNode {
    fn from(token: DesignToken) -> Self {
        Self::Token(token)
    }
}

impl From<TokenGroup> for TokenNode {
    fn from(group: TokenGroup) -> Self {
        Self::Group(group)
    }
}

/// A named container of tokens and nested groups, in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenGroup {
    children: IndexMap<String, TokenNode>,
}

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<TokenNode>) -> Self {
        self.insert(key, node);
        self
    }

    /// Inserts a child, replacing any existing child with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<TokenNode>) {
        self.children.insert(key.into(), node.into());
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.children.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenNode)> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaves (tokens and literals) in the whole subtree.
    pub fn leaf_count(&self) -> usize {
        self.children
            .values()
            .map(|node| match node {
                TokenNode::Group(group) => group.leaf_count(),
                TokenNode::Token(_) | TokenNode::Literal(_) => 1,
            })
            .sum()
    }
}

impl From<Map<String, Value>> for TokenGroup {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, TokenNode::from(value)))
            .collect()
    }
}

impl From<TokenGroup> for Value {
    fn from(group: TokenGroup) -> Self {
        Value::Object(
            group
                .children
                .into_iter()
                .map(|(key, node)| (key, Value::from(node)))
                .collect(),
        )
    }
}

impl FromIterator<(String, TokenNode)> for TokenGroup {
    fn from_iter<I: IntoIterator<Item = (String, TokenNode)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}
