//! Design-token trees and the algorithms over them.
//!
//! - [`model`]: tagged token/group representation of a DTCG tree
//! - [`flatten`]: dotted path to resolved value
//! - [`diff`]: path-level comparison of two trees
//! - [`features`]: color and font extraction for similarity scoring
//! - [`export`]: canonical JSON serialization

pub mod diff;
pub mod export;
pub mod features;
pub mod flatten;
pub mod model;

pub use diff::{
    DiffGroup, DiffStatus, DiffSummary, TokenDiffEntry, changes_only, diff, diff_flattened,
    group_by_category, values_equal,
};
pub use export::{export_flattened, export_tree};
pub use features::{extract_colors, extract_fonts, primary_font_family};
pub use flatten::{FlatTokenMap, FlattenedToken, PATH_SEPARATOR, flatten};
pub use model::{DesignToken, TokenGroup, TokenNode};
