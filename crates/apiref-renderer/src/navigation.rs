//! Side navigation tree.
//!
//! Walks a menu tree independently of the content tree. In compact mode
//! operations are not navigable on their own, so they are filtered out both
//! from the rendered lists and from the child counts that decide whether an
//! entry shows an expand affordance.

use apiref_model::MenuItem;
use tracing::debug;

use crate::config::PresentationConfig;

/// Rendered navigation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavList<'a> {
    /// Whether the list is shown or folded away.
    pub expanded: bool,
    /// Root lists carry the navigation landmark role.
    pub landmark: bool,
    pub entries: Vec<NavEntry<'a>>,
}

impl<'a> NavList<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by item id anywhere in this list or its descendants.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&NavEntry<'a>> {
        self.entries.iter().find_map(|entry| {
            if entry.item.id == id {
                Some(entry)
            } else {
                entry.children.as_ref().and_then(|children| children.find(id))
            }
        })
    }
}

/// Rendered navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry<'a> {
    pub item: &'a MenuItem,
    /// No navigable children after filtering; the entry gets no expand toggle.
    pub without_children: bool,
    /// Nested list, present only when there are navigable children.
    pub children: Option<NavList<'a>>,
}

/// Navigation tree renderer.
///
/// # Example
///
/// ```
/// use apiref_model::{HttpVerb, ItemType, MenuItem};
/// use apiref_renderer::{NavigationTree, PresentationConfig};
///
/// let items = vec![
///     MenuItem::new("tag/pets", "Pets", ItemType::Tag)
///         .with_items(vec![MenuItem::operation("op/list", "List pets", HttpVerb::Get)]),
/// ];
/// let compact = PresentationConfig {
///     compact_operation_header: true,
///     ..Default::default()
/// };
///
/// let nav = NavigationTree::new(&items).root(true).render(&compact);
/// assert!(nav.landmark);
/// assert!(nav.entries[0].without_children);
/// ```
pub struct NavigationTree<'a> {
    items: &'a [MenuItem],
    expanded: bool,
    root: bool,
    on_activate: Option<&'a dyn Fn(&MenuItem)>,
}

impl<'a> NavigationTree<'a> {
    /// Create a renderer for `items`; expanded, not root, no callback.
    #[must_use]
    pub fn new(items: &'a [MenuItem]) -> Self {
        Self {
            items,
            expanded: true,
            root: false,
            on_activate: None,
        }
    }

    #[must_use]
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Mark this as the root list (adds the navigation landmark role).
    #[must_use]
    pub fn root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    /// Callback fired when any entry of the tree is activated.
    #[must_use]
    pub fn on_activate(mut self, on_activate: &'a dyn Fn(&MenuItem)) -> Self {
        self.on_activate = Some(on_activate);
        self
    }

    /// Render the tree.
    #[must_use]
    pub fn render(&self, config: &PresentationConfig) -> NavList<'a> {
        let list = render_list(self.items, self.expanded, self.root, config);
        debug!(entries = list.len(), root = self.root, "Rendered navigation tree");
        list
    }

    /// Activate an entry. The callback receives the same item reference.
    pub fn activate(&self, item: &MenuItem) {
        debug!(id = %item.id, "Activated navigation item");
        if let Some(on_activate) = self.on_activate {
            on_activate(item);
        }
    }
}

fn navigable(items: &[MenuItem], config: PresentationConfig) -> impl Iterator<Item = &MenuItem> {
    items
        .iter()
        .filter(move |item| config.is_navigable(item.item_type))
}

fn render_list<'a>(
    items: &'a [MenuItem],
    expanded: bool,
    landmark: bool,
    config: &PresentationConfig,
) -> NavList<'a> {
    NavList {
        expanded,
        landmark,
        entries: navigable(items, *config)
            .map(|item| render_entry(item, config))
            .collect(),
    }
}

fn render_entry<'a>(item: &'a MenuItem, config: &PresentationConfig) -> NavEntry<'a> {
    let without_children = navigable(&item.items, *config).next().is_none();
    NavEntry {
        item,
        without_children,
        children: (!without_children)
            .then(|| render_list(&item.items, item.expanded, false, config)),
    }
}
