//! Per-node expand/collapse state.
//!
//! Operation nodes own a small piece of interactive state. It lives in an
//! id-keyed store rather than in the nodes themselves, because rendered nodes
//! are rebuilt on every pass while the state must survive for as long as the
//! node's identity stays in the tree.

use std::collections::{HashMap, HashSet};

/// Disclosure state of an operation node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    /// The state after one toggle event.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Expand state of every mounted operation node, keyed by item id.
///
/// A node is mounted while its id is part of the most recently rendered tree.
/// When an id leaves the tree its state is dropped, so a node that comes back
/// later starts collapsed again.
#[derive(Debug, Default)]
pub struct ExpandStore {
    mounted: HashSet<String>,
    states: HashMap<String, ExpandState>,
}

impl ExpandStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a node. Unknown ids are collapsed.
    #[must_use]
    pub fn state(&self, id: &str) -> ExpandState {
        self.states.get(id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_mounted(&self, id: &str) -> bool {
        self.mounted.contains(id)
    }

    /// Flip the state of a mounted node.
    ///
    /// Returns the new state, or `None` if no node with this id is mounted.
    pub fn toggle(&mut self, id: &str) -> Option<ExpandState> {
        if !self.mounted.contains(id) {
            return None;
        }
        let state = self.states.entry(id.to_owned()).or_default();
        *state = state.toggled();
        Some(*state)
    }

    /// Replace the set of mounted node ids after a render pass.
    ///
    /// State for ids no longer present is discarded.
    pub fn sync_mounted<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.mounted = ids.into_iter().map(str::to_owned).collect();
        let mounted = &self.mounted;
        self.states.retain(|id, _| mounted.contains(id));
    }

    /// Number of mounted nodes.
    #[must_use]
    pub fn mounted_len(&self) -> usize {
        self.mounted.len()
    }
}
