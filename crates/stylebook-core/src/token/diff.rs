//! Token tree diffing.
//!
//! Both trees are flattened, their paths unioned, and every path classified as
//! same / different / left-only / right-only. Results come back sorted by
//! path so they can be snapshotted.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use super::flatten::{FlatTokenMap, flatten};
use super::model::TokenGroup;

/// Relationship of a token path across two trees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DiffStatus {
    Same,
    Different,
    LeftOnly,
    RightOnly,
}

impl DiffStatus {
    /// The status seen when the two sides are swapped.
    pub fn swapped(self) -> Self {
        match self {
            Self::LeftOnly => Self::RightOnly,
            Self::RightOnly => Self::LeftOnly,
            other => other,
        }
    }

    pub fn is_change(self) -> bool {
        self != Self::Same
    }
}

/// One classified path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDiffEntry {
    /// Dot-joined path.
    pub path: String,
    pub segments: Vec<String>,
    /// `None` when the path is absent on the left.
    pub left_value: Option<Value>,
    /// `None` when the path is absent on the right.
    pub right_value: Option<Value>,
    pub status: DiffStatus,
}

impl TokenDiffEntry {
    /// Top-level token category (first path segment).
    pub fn category(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or("")
    }
}

/// Diffs two token trees.
///
/// Every leaf path present on either side appears exactly once, in ascending
/// path order. A subtree missing on one side yields one entry per leaf.
pub fn diff(left: &TokenGroup, right: &TokenGroup) -> Vec<TokenDiffEntry> {
    diff_flattened(&flatten(left), &flatten(right))
}

/// Diffs two already-flattened trees.
pub fn diff_flattened(left: &FlatTokenMap, right: &FlatTokenMap) -> Vec<TokenDiffEntry> {
    // BTreeSet iteration is ascending, which is the output order.
    let paths: BTreeSet<&String> = left.keys().chain(right.keys()).collect();

    paths
        .into_iter()
        .filter_map(|path| {
            let (segments, left_value, right_value, status) =
                match (left.get(path), right.get(path)) {
                    (Some(l), Some(r)) => {
                        let status = if values_equal(&l.value, &r.value) {
                            DiffStatus::Same
                        } else {
                            DiffStatus::Different
                        };
                        (&l.segments, Some(l.value.clone()), Some(r.value.clone()), status)
                    }
                    (Some(l), None) => {
                        (&l.segments, Some(l.value.clone()), None, DiffStatus::LeftOnly)
                    }
                    (None, Some(r)) => {
                        (&r.segments, None, Some(r.value.clone()), DiffStatus::RightOnly)
                    }
                    (None, None) => return None,
                };
            Some(TokenDiffEntry {
                path: path.clone(),
                segments: segments.clone(),
                left_value,
                right_value,
                status,
            })
        })
        .collect()
}

/// Canonical structural equality of two token values.
///
/// Object key order is ignored and numbers compare by numeric value, so
/// `{"a":1,"b":2}` equals `{"b":2.0,"a":1}`.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, a)| y.get(key).is_some_and(|b| values_equal(a, b)))
        }
        _ => a == b,
    }
}

/// Diff entries sharing a top-level category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffGroup {
    pub category: String,
    pub entries: Vec<TokenDiffEntry>,
}

/// Partitions diff entries by their first path segment.
///
/// Categories appear in first-appearance order and entries keep their
/// relative order, so a sorted diff yields alphabetical categories.
pub fn group_by_category(entries: &[TokenDiffEntry]) -> Vec<DiffGroup> {
    let mut groups: IndexMap<&str, Vec<TokenDiffEntry>> = IndexMap::new();
    for entry in entries {
        groups
            .entry(entry.category())
            .or_default()
            .push(entry.clone());
    }
    groups
        .into_iter()
        .map(|(category, entries)| DiffGroup {
            category: category.to_string(),
            entries,
        })
        .collect()
}

/// Entries whose status is not [`DiffStatus::Same`].
pub fn changes_only(entries: &[TokenDiffEntry]) -> Vec<&TokenDiffEntry> {
    entries.iter().filter(|e| e.status.is_change()).collect()
}

/// Per-status counts of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub same: usize,
    pub different: usize,
    pub left_only: usize,
    pub right_only: usize,
}

impl DiffSummary {
    pub fn from_entries(entries: &[TokenDiffEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            match entry.status {
                DiffStatus::Same => summary.same += 1,
                DiffStatus::Different => summary.different += 1,
                DiffStatus::LeftOnly => summary.left_only += 1,
                DiffStatus::RightOnly => summary.right_only += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.same + self.different + self.left_only + self.right_only
    }

    pub fn has_changes(&self) -> bool {
        self.total() != self.same
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
    fn test_diff_classifies_changed_and_added_paths() {
        let left = tree(json!({ "color": { "primary": { "$value": "#fff" } } }));
        let right = tree(json!({
            "color": { "primary": { "$value": "#000" } },
            "spacing": { "sm": { "$value": "4px" } }
        }));

        let entries = diff(&left, &right);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].path, "color.primary");
        assert_eq!(entries[0].status, DiffStatus::Different);
        assert_eq!(entries[0].left_value, Some(json!("#fff")));
        assert_eq!(entries[0].right_value, Some(json!("#000")));

        assert_eq!(entries[1].path, "spacing.sm");
        assert_eq!(entries[1].status, DiffStatus::RightOnly);
        assert_eq!(entries[1].left_value, None);
    }

    #[test]
    fn test_diff_empty_trees() {
        assert!(diff(&TokenGroup::new(), &TokenGroup::new()).is_empty());
    }

    #[test]
    fn test_missing_subtree_yields_entry_per_leaf() {
        let left = tree(json!({
            "typography": {
                "heading": {
                    "fontFamily": { "$value": "Inter" },
                    "fontWeight": { "$value": 700 }
                }
            }
        }));
        let entries = diff(&left, &TokenGroup::new());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.status == DiffStatus::LeftOnly));
        assert!(entries.iter().all(|e| e.right_value.is_none()));
    }

    #[test]
    fn test_structured_values_compare_deeply() {
        let left = tree(json!({
            "shadow": { "card": { "$value": { "blur": "8px", "offsetY": 2 } } }
        }));
        let right = tree(json!({
            "shadow": { "card": { "$value": { "offsetY": 2.0, "blur": "8px" } } }
        }));
        let entries = diff(&left, &right);
        assert_eq!(entries[0].status, DiffStatus::Same);

        let changed = tree(json!({
            "shadow": { "card": { "$value": { "offsetY": 4, "blur": "8px" } } }
        }));
        assert_eq!(diff(&left, &changed)[0].status, DiffStatus::Different);
    }

    #[test]
    fn test_diff_is_symmetric_in_labels() {
        let a = tree(json!({
            "color": { "primary": { "$value": "#fff" }, "accent": { "$value": "#f0f" } },
            "radius": { "md": { "$value": "8px" } }
        }));
        let b = tree(json!({
            "color": { "primary": { "$value": "#fff" } },
            "radius": { "md": { "$value": "6px" } },
            "motion": { "fast": { "$value": "100ms" } }
        }));

        let forward = diff(&a, &b);
        let backward = diff(&b, &a);
        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!(f.path, b.path);
            assert_eq!(f.status.swapped(), b.status);
        }
    }

    #[test]
    fn test_output_sorted_by_path() {
        let left = tree(json!({
            "z": { "a": { "$value": 1 } },
            "a": { "z": { "$value": 1 }, "b": { "$value": 1 } }
        }));
        let paths: Vec<_> = diff(&left, &TokenGroup::new())
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, vec!["a.b", "a.z", "z.a"]);
    }

    #[test]
    fn test_group_by_category() {
        let left = tree(json!({
            "color": { "a": { "$value": "#1" }, "b": { "$value": "#2" } },
            "spacing": { "sm": { "$value": "4px" } }
        }));
        let right = tree(json!({
            "color": { "a": { "$value": "#1" } },
            "spacing": { "sm": { "$value": "2px" } }
        }));

        let entries = diff(&left, &right);
        let groups = group_by_category(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "color");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].category, "spacing");

        let regrouped: Vec<_> = groups.into_iter().flat_map(|g| g.entries).collect();
        assert_eq!(regrouped, entries);
    }

    #[test]
    fn test_summary_and_changes() {
        let left = tree(json!({
            "color": { "a": { "$value": "#1" }, "b": { "$value": "#2" } }
        }));
        let right = tree(json!({
            "color": { "a": { "$value": "#1" }, "c": { "$value": "#3" } }
        }));

        let entries = diff(&left, &right);
        let summary = DiffSummary::from_entries(&entries);
        assert_eq!(
            summary,
            DiffSummary {
                same: 1,
                different: 0,
                left_only: 1,
                right_only: 1
            }
        );
        assert!(summary.has_changes());
        assert_eq!(changes_only(&entries).len(), 2);
    }

    #[test]
    fn test_status_string_forms() {
        assert_eq!(DiffStatus::LeftOnly.to_string(), "left-only");
        assert_eq!(
            "right-only".parse::<DiffStatus>().unwrap(),
            DiffStatus::RightOnly
        );
        assert_eq!(
            serde_json::to_value(DiffStatus::Same).unwrap(),
            json!("same")
        );
    }
}
