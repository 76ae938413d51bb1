use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use stylebook_application::TokenComparison;
use stylebook_core::token::{DiffStatus, TokenDiffEntry, TokenGroup};

pub fn run(left: &Path, right: &Path, changes_only: bool, json: bool) -> Result<()> {
    let left = read_tree(left)?;
    let right = read_tree(right)?;
    let comparison = TokenComparison::between(&left, &right);

    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print!("{}", render_comparison(&comparison, changes_only));
    }
    Ok(())
}

fn read_tree(path: &Path) -> Result<TokenGroup> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a token tree", path.display()))
}

/// Text rendering of a comparison, grouped by category.
pub fn render_comparison(comparison: &TokenComparison, changes_only: bool) -> String {
    let mut out = String::new();
    for group in &comparison.groups {
        let lines: Vec<String> = group
            .entries
            .iter()
            .filter(|e| !changes_only || e.status.is_change())
            .map(render_entry)
            .collect();
        if lines.is_empty() {
            continue;
        }
        out.push_str(&group.category);
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }

    let summary = &comparison.summary;
    out.push_str(&format!(
        "{} same, {} different, {} left-only, {} right-only\n",
        summary.same, summary.different, summary.left_only, summary.right_only
    ));
    out
}

fn render_entry(entry: &TokenDiffEntry) -> String {
    let value = |v: &Option<Value>| v.as_ref().map(Value::to_string).unwrap_or_default();
    match entry.status {
        DiffStatus::Same => format!("= {}  {}", entry.path, value(&entry.left_value)),
        DiffStatus::Different => format!(
            "~ {}  {} -> {}",
            entry.path,
            value(&entry.left_value),
            value(&entry.right_value)
        ),
        DiffStatus::LeftOnly => format!("- {}  {}", entry.path, value(&entry.left_value)),
        DiffStatus::RightOnly => format!("+ {}  {}", entry.path, value(&entry.right_value)),
    }
}
