//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

use apiref_model::{ContentItem, duplicate_ids};

use crate::output::Output;

/// Warn about ids that would make deep links ambiguous. Rendering proceeds.
pub(crate) fn warn_duplicate_ids(output: &Output, items: &[ContentItem]) -> usize {
    let duplicates = duplicate_ids(items);
    for id in &duplicates {
        tracing::warn!(id = %id, "Duplicate content id");
        output.warning(&format!("duplicate id `{id}`: deep links to it are ambiguous"));
    }
    duplicates.len()
}
