//! Feature extraction over token trees.
//!
//! Pulls color values and primary font families out of a tree for the
//! similarity scorer. Containers are found by key at any depth, so both
//! `color.*` and `theme.dark.color.*` are collected.

use std::collections::BTreeSet;

use serde_json::Value;

use super::model::{DesignToken, TokenGroup, TokenNode};

/// Key of groups holding color tokens.
pub const COLOR_GROUP_KEY: &str = "color";
/// Key of groups holding font-family tokens.
pub const FONT_FAMILY_GROUP_KEY: &str = "fontFamily";

/// Lower-cased string values of every token under a `color` group.
pub fn extract_colors(tree: &TokenGroup) -> BTreeSet<String> {
    let mut colors = BTreeSet::new();
    for container in find_containers(tree, COLOR_GROUP_KEY) {
        for_each_token(container, &mut |token| {
            if let Some(color) = token.value().and_then(Value::as_str) {
                colors.insert(color.to_lowercase());
            }
        });
    }
    colors
}

/// Lower-cased primary font names of every token under a `fontFamily` group.
///
/// For a CSS font stack only the part before the first comma counts. A DTCG
/// array value contributes its first entry.
pub fn extract_fonts(tree: &TokenGroup) -> BTreeSet<String> {
    let mut fonts = BTreeSet::new();
    for container in find_containers(tree, FONT_FAMILY_GROUP_KEY) {
        for_each_token(container, &mut |token| {
            let stack = match token.value() {
                Some(Value::String(stack)) => Some(stack.as_str()),
                Some(Value::Array(families)) => families.first().and_then(Value::as_str),
                _ => None,
            };
            if let Some(stack) = stack {
                fonts.insert(primary_font_family(stack));
            }
        });
    }
    fonts
}

/// First family of a font stack, trimmed and lower-cased.
///
/// A stack with an empty first entry (`""`, `", serif"`) yields `""`.
pub fn primary_font_family(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Groups keyed `key` anywhere in the tree. Matching groups are not searched
/// further since their whole subtree is visited by the caller.
fn find_containers<'a>(tree: &'a TokenGroup, key: &str) -> Vec<&'a TokenGroup> {
    let mut found = Vec::new();
    let mut stack = vec![tree];
    while let Some(group) = stack.pop() {
        for (child_key, node) in group.iter() {
            if let TokenNode::Group(child) = node {
                if child_key == key {
                    found.push(child);
                } else {
                    stack.push(child);
                }
            }
        }
    }
    found
}

fn for_each_token(group: &TokenGroup, visit: &mut impl FnMut(&DesignToken)) {
    for (_, node) in group.iter() {
        match node {
            TokenNode::Token(token) => visit(token),
            TokenNode::Group(child) => for_each_token(child, visit),
            TokenNode::Literal(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> TokenGroup {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_colors_at_any_depth() {
        let group = tree(json!({
            "color": {
                "primary": { "$type": "color", "$value": "#FFFFFF" },
                "brand": { "accent": { "$value": "#FF00AA" } }
            },
            "theme": {
                "dark": {
                    "color": { "surface": { "$value": "#ffffff" } }
                }
            },
            "spacing": { "sm": { "$value": "4px" } }
        }));

        let colors = extract_colors(&group);
        assert_eq!(
            colors.into_iter().collect::<Vec<_>>(),
            vec!["#ff00aa", "#ffffff"]
        );
    }

    #[test]
    fn test_extract_colors_skips_malformed() {
        let group = tree(json!({
            "color": {
                "missing": { "$type": "color" },
                "structured": { "$value": { "colorSpace": "srgb", "components": [1, 0, 0] } },
                "raw": "#123456",
                "ok": { "$value": "rgb(1, 2, 3)" }
            }
        }));

        let colors = extract_colors(&group);
        assert_eq!(colors.len(), 1);
        assert!(colors.contains("rgb(1, 2, 3)"));
    }

    #[test]
    fn test_extract_fonts_takes_primary_family() {
        let group = tree(json!({
            "typography": {
                "fontFamily": {
                    "body": { "$value": " Inter , system-ui, sans-serif" },
                    "mono": { "$value": ["JetBrains Mono", "monospace"] },
                    "dup": { "$value": "inter" }
                }
            },
            "fontFamily": { "display": { "$value": "Playfair Display" } }
        }));

        let fonts = extract_fonts(&group);
        assert_eq!(
            fonts.into_iter().collect::<Vec<_>>(),
            vec!["inter", "jetbrains mono", "playfair display"]
        );
    }

    #[test]
    fn test_extract_from_tree_without_containers() {
        let group = tree(json!({ "spacing": { "sm": { "$value": "4px" } } }));
        assert!(extract_colors(&group).is_empty());
        assert!(extract_fonts(&group).is_empty());
    }

    #[test]
    fn test_primary_font_family() {
        assert_eq!(primary_font_family("Helvetica Neue, Arial"), "helvetica neue");
        assert_eq!(primary_font_family("  , serif"), "");
        assert_eq!(primary_font_family(""), "");
    }

    #[test]
    fn test_extract_fonts_keeps_empty_primary_family() {
        let group = tree(json!({
            "fontFamily": {
                "blank": { "$value": "" },
                "fallback": { "$value": ", serif" },
                "body": { "$value": "Inter" }
            }
        }));

        let fonts = extract_fonts(&group);
        assert_eq!(fonts.into_iter().collect::<Vec<_>>(), vec!["", "inter"]);
    }
}
