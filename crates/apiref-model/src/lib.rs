//! Content and navigation tree types for API reference rendering.
//!
//! Both trees are produced upstream (by whatever builds the document model from
//! an API description) and are only ever read here. The content tree drives the
//! main documentation body; the menu tree drives the side navigation and may be
//! a reduced or reordered view of the same document. Both share one id space so
//! a menu entry can deep-link into the content.
//!
//! # Example
//!
//! ```
//! use apiref_model::{ContentItem, HttpVerb, ItemType};
//!
//! let tree = vec![
//!     ContentItem::tag("tag/pets", "Pets")
//!         .with_level(2)
//!         .with_items(vec![ContentItem::operation(
//!             "op/listPets",
//!             "List pets",
//!             HttpVerb::Get,
//!             "/pets",
//!         )]),
//! ];
//!
//! assert_eq!(tree[0].item_type(), ItemType::Tag);
//! assert_eq!(tree[0].children().len(), 1);
//! ```

mod audit;
mod content;
mod load;
mod menu;

pub use audit::duplicate_ids;
pub use content::{ContentItem, ContentKind, ExternalDocs, HttpVerb, ItemType, OperationData};
pub use load::{ModelError, load_content, load_menu};
pub use menu::MenuItem;
