//! Content tree composition.
//!
//! Maps an ordered sequence of content items to rendered nodes, one node per
//! item, recursing into children. Each node carries an optional section
//! container (absent for groups) followed by its children. Children are
//! siblings of the container, not nested inside it, so the document reads as a
//! flat continuation of sections.

use apiref_model::{ContentItem, ContentKind, ExternalDocs};
use tracing::debug;

use crate::config::PresentationConfig;
use crate::html::middle_panel_wrap;
use crate::markdown::render_markdown;
use crate::operation::{OperationView, render_operation};
use crate::state::{ExpandState, ExpandStore};

/// Heading rank of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `<h1>`
    Primary,
    /// `<h2>`
    Secondary,
}

impl HeadingLevel {
    fn from_level(level: Option<u8>) -> Self {
        if level == Some(2) {
            Self::Secondary
        } else {
            Self::Primary
        }
    }
}

/// Heading, description and external docs of a tag or section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionBody<'a> {
    /// Share-anchor target.
    pub id: &'a str,
    pub name: &'a str,
    pub heading: HeadingLevel,
    /// Rendered description, empty when there is none.
    pub description_html: String,
    pub external_docs: Option<&'a ExternalDocs>,
}

/// What a section container holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeBody<'a> {
    Section(SectionBody<'a>),
    Operation(OperationView<'a>),
}

/// Deep-link container around a node body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionContainer<'a> {
    /// Deep-link target.
    pub id: &'a str,
    /// Operations sit closer together than prose sections.
    pub tight_spacing: bool,
    pub body: NodeBody<'a>,
}

/// One rendered content item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentNode<'a> {
    pub item: &'a ContentItem,
    /// `None` for items without a body of their own (groups).
    pub section: Option<SectionContainer<'a>>,
    /// Rendered children, in source order.
    pub children: Vec<ContentNode<'a>>,
}

impl<'a> ContentNode<'a> {
    /// Number of deep-link anchors in this subtree.
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        usize::from(self.section.is_some())
            + self.children.iter().map(ContentNode::anchor_count).sum::<usize>()
    }

    fn collect_anchor_ids(&self, out: &mut Vec<&'a str>) {
        if let Some(section) = &self.section {
            out.push(section.id);
        }
        for child in &self.children {
            child.collect_anchor_ids(out);
        }
    }
}

/// Deep-link anchor ids of rendered nodes, in document order.
#[must_use]
pub fn anchor_ids<'a>(nodes: &[ContentNode<'a>]) -> Vec<&'a str> {
    let mut ids = Vec::new();
    for node in nodes {
        node.collect_anchor_ids(&mut ids);
    }
    ids
}

/// Render a content tree.
///
/// Returns exactly one node per input item, in order. Expand state is only
/// read here; see [`ContentTree`] for the stateful wrapper.
#[must_use]
pub fn render_content<'a>(
    items: &'a [ContentItem],
    config: &PresentationConfig,
    expand: &ExpandStore,
) -> Vec<ContentNode<'a>> {
    items
        .iter()
        .map(|item| render_node(item, config, expand))
        .collect()
}

fn render_node<'a>(
    item: &'a ContentItem,
    config: &PresentationConfig,
    expand: &ExpandStore,
) -> ContentNode<'a> {
    let section = render_body(item, config, expand).map(|body| SectionContainer {
        id: &item.id,
        tight_spacing: matches!(body, NodeBody::Operation(_)),
        body,
    });

    ContentNode {
        item,
        section,
        children: render_content(item.children(), config, expand),
    }
}

fn render_body<'a>(
    item: &'a ContentItem,
    config: &PresentationConfig,
    expand: &ExpandStore,
) -> Option<NodeBody<'a>> {
    match &item.kind {
        ContentKind::Group => None,
        ContentKind::Tag | ContentKind::Section | ContentKind::Other => {
            Some(NodeBody::Section(render_section(item)))
        }
        ContentKind::Operation(operation) => Some(NodeBody::Operation(render_operation(
            item,
            operation,
            config,
            expand.state(&item.id),
        ))),
    }
}

fn render_section(item: &ContentItem) -> SectionBody<'_> {
    SectionBody {
        id: &item.id,
        name: &item.name,
        heading: HeadingLevel::from_level(item.level),
        description_html: render_markdown(
            item.description.as_deref().unwrap_or_default(),
            Some(&middle_panel_wrap),
        ),
        external_docs: item.external_docs.as_ref(),
    }
}

fn collect_operation_ids<'a>(items: &'a [ContentItem], out: &mut Vec<&'a str>) {
    for item in items {
        if item.operation_data().is_some() {
            out.push(&item.id);
        }
        collect_operation_ids(item.children(), out);
    }
}

/// Stateful content tree renderer.
///
/// Owns the expand state of the operation nodes it has rendered. Every
/// [`render`](Self::render) pass mounts the operations present in the given
/// tree and forgets the ones that disappeared.
///
/// # Example
///
/// ```
/// use apiref_model::{ContentItem, HttpVerb};
/// use apiref_renderer::{ContentTree, ExpandState, PresentationConfig};
///
/// let items = vec![ContentItem::operation("op", "List", HttpVerb::Get, "/pets")];
/// let config = PresentationConfig {
///     compact_operation_header: true,
///     ..Default::default()
/// };
/// let mut tree = ContentTree::new();
///
/// let nodes = tree.render(&items, &config);
/// assert_eq!(nodes.len(), 1);
///
/// assert_eq!(tree.toggle("op"), Some(ExpandState::Expanded));
/// ```
#[derive(Debug, Default)]
pub struct ContentTree {
    expand: ExpandStore,
}

impl ContentTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a render pass and update the set of mounted operation nodes.
    pub fn render<'a>(
        &mut self,
        items: &'a [ContentItem],
        config: &PresentationConfig,
    ) -> Vec<ContentNode<'a>> {
        let mut operation_ids = Vec::new();
        collect_operation_ids(items, &mut operation_ids);
        self.expand.sync_mounted(operation_ids);

        let nodes = render_content(items, config, &self.expand);
        debug!(
            items = nodes.len(),
            anchors = nodes.iter().map(ContentNode::anchor_count).sum::<usize>(),
            operations = self.expand.mounted_len(),
            "Rendered content tree"
        );
        nodes
    }

    /// Fire the toggle event on an operation node.
    ///
    /// Returns the new state, or `None` if no operation with this id was
    /// part of the last render pass. The next pass reflects the change.
    pub fn toggle(&mut self, id: &str) -> Option<ExpandState> {
        let state = self.expand.toggle(id);
        debug!(id, ?state, "Toggled operation");
        state
    }

    /// Current expand state of an operation node.
    #[must_use]
    pub fn expand_state(&self, id: &str) -> ExpandState {
        self.expand.state(id)
    }
}
