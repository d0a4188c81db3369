//! Content tree and navigation rendering for API reference pages.
//!
//! Two independent entry points share one [`PresentationConfig`]:
//!
//! - [`render_content`] / [`ContentTree`]: turns a content tree (groups, tags,
//!   sections, operations) into rendered nodes with id-keyed deep-link
//!   containers. Operations may collapse behind a compact header whose
//!   expand state is tracked per node in an [`ExpandStore`].
//! - [`NavigationTree`]: turns a menu tree into the side navigation, hiding
//!   operations in compact mode.
//!
//! Rendered nodes are plain data; [`write_content`] and [`write_navigation`]
//! serialize them to HTML and [`render_page`] wraps both into a document.
//!
//! # Example
//!
//! ```
//! use apiref_model::{ContentItem, HttpVerb};
//! use apiref_renderer::{ContentTree, PresentationConfig, write_content};
//!
//! let items = vec![
//!     ContentItem::tag("a", "Pets")
//!         .with_level(2)
//!         .with_items(vec![ContentItem::operation("a.1", "List pets", HttpVerb::Get, "/pets")]),
//! ];
//!
//! let mut tree = ContentTree::new();
//! let nodes = tree.render(&items, &PresentationConfig::default());
//! let html = write_content(&nodes);
//!
//! assert!(html.contains(r#"<section id="a" class="content-section">"#));
//! assert!(html.contains("<code>/pets</code>"));
//! ```

mod config;
mod content;
mod html;
mod markdown;
mod navigation;
mod operation;
mod page;
mod state;
mod util;

pub use config::PresentationConfig;
pub use content::{
    ContentNode, ContentTree, HeadingLevel, NodeBody, SectionBody, SectionContainer, anchor_ids,
    render_content,
};
pub use html::{write_content, write_navigation};
pub use markdown::render_markdown;
pub use navigation::{NavEntry, NavList, NavigationTree};
pub use operation::{CompactHeader, Direction, OperationDetail, OperationView};
pub use page::{PageData, render_page};
pub use state::{ExpandState, ExpandStore};
pub use util::escape_html;
