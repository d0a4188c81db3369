//! Tree-wide presentation settings.

use apiref_model::ItemType;

/// Presentation settings shared by every node of a render pass.
///
/// Created once at the root and passed by reference down the recursion.
/// Nothing below the root ever mutates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PresentationConfig {
    /// Collapse each operation behind a clickable one-line header.
    pub compact_operation_header: bool,
    /// Omit the summary line from compact operation headers.
    pub hide_operation_summary: bool,
}

impl PresentationConfig {
    /// Whether items of this type get their own navigation entry.
    ///
    /// In compact mode operations are reached through their parent section.
    #[must_use]
    pub fn is_navigable(&self, item_type: ItemType) -> bool {
        !(self.compact_operation_header && item_type == ItemType::Operation)
    }
}
