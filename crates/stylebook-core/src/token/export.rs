//! Canonical JSON export of token trees.

use serde_json::{Map, Value};

use super::flatten::flatten;
use super::model::TokenGroup;
use crate::error::Result;

/// Pretty-printed JSON of the tree, keys in source order.
pub fn export_tree(tree: &TokenGroup) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Pretty-printed JSON object of dotted path to resolved value, ascending by path.
pub fn export_flattened(tree: &TokenGroup) -> Result<String> {
    let object: Map<String, Value> = flatten(tree)
        .into_iter()
        .map(|(path, entry)| (path, entry.value))
        .collect();
    Ok(serde_json::to_string_pretty(&Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r##"{
  "color": {
    "primary": {
      "$value": "#0055ff",
      "$type": "color",
      "$description": "Brand blue"
    },
    "ink": {
      "$type": "color",
      "$value": "#111111"
    }
  },
  "spacing": {
    "sm": {
      "$type": "dimension",
      "$value": "4px"
    }
  }
}"##;

    #[test]
    fn test_export_tree_is_lossless() {
        let tree: TokenGroup = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(export_tree(&tree).unwrap(), DOCUMENT);
    }

    #[test]
    fn test_export_flattened() {
        let tree: TokenGroup = serde_json::from_str(DOCUMENT).unwrap();
        let exported = export_flattened(&tree).unwrap();
        let value: Value = serde_json::from_str(&exported).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["color.ink", "color.primary", "spacing.sm"]);
        assert_eq!(value["color.primary"], "#0055ff");
    }
}
