//! Token tree flattening.
//!
//! Walks a [`TokenGroup`] and produces one entry per leaf keyed by its
//! dot-joined path. Group nodes never produce entries.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::model::{TokenGroup, TokenNode};

/// Separator used when joining path segments into a key.
pub const PATH_SEPARATOR: &str = ".";

/// A leaf of a flattened token tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedToken {
    /// Path from the root group to the leaf.
    pub segments: Vec<String>,
    /// The resolved leaf value.
    pub value: Value,
}

impl FlattenedToken {
    /// Dot-joined path.
    pub fn path(&self) -> String {
        self.segments.join(PATH_SEPARATOR)
    }
}

/// Flattened tree keyed by dot-joined path, iterated in ascending path order.
pub type FlatTokenMap = BTreeMap<String, FlattenedToken>;

/// Flattens a token tree.
///
/// Tokens resolve to their `$value` (or to the whole token object when
/// `$value` is missing) and literals are kept as they are. Never fails.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use stylebook_core::token::{flatten, TokenGroup};
///
/// let tree: TokenGroup = serde_json::from_value(json!({
///     "color": { "primary": { "$value": "#fff" } }
/// })).unwrap();
///
/// let flat = flatten(&tree);
/// assert_eq!(flat["color.primary"].value, json!("#fff"));
/// ```
pub fn flatten(tree: &TokenGroup) -> FlatTokenMap {
    let mut entries = FlatTokenMap::new();
    let mut prefix = Vec::new();
    walk(tree, &mut prefix, &mut entries);
    entries
}

fn walk(group: &TokenGroup, prefix: &mut Vec<String>, entries: &mut FlatTokenMap) {
    for (key, node) in group.iter() {
        prefix.push(key.clone());
        match node {
            TokenNode::Group(child) => walk(child, prefix, entries),
            TokenNode::Token(token) => emit(prefix, token.resolved_value(), entries),
            TokenNode::Literal(value) => emit(prefix, value.clone(), entries),
        }
        prefix.pop();
    }
}

fn emit(prefix: &[String], value: Value, entries: &mut FlatTokenMap) {
    let entry = FlattenedToken {
        segments: prefix.to_vec(),
        value,
    };
    entries.insert(entry.path(), entry);
}
