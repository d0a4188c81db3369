//! Navigation menu items.

use serde::Deserialize;

use crate::content::{HttpVerb, ItemType};

/// A node of the navigation tree.
///
/// Supplied independently of the content tree, but `id` refers to the same
/// deep-link targets.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Children in menu order. Empty means leaf.
    #[serde(default)]
    pub items: Vec<MenuItem>,
    /// Whether this item's own children are shown.
    #[serde(default)]
    pub expanded: bool,
    /// Whether this item is the current navigation target.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub http_verb: Option<HttpVerb>,
}

impl MenuItem {
    /// Create a leaf item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            items: Vec::new(),
            expanded: false,
            active: false,
            deprecated: false,
            http_verb: None,
        }
    }

    /// Create an operation leaf.
    pub fn operation(id: impl Into<String>, name: impl Into<String>, verb: HttpVerb) -> Self {
        Self {
            http_verb: Some(verb),
            ..Self::new(id, name, ItemType::Operation)
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_menu_item() {
        let json = r#"{
            "id": "tag/pets",
            "name": "Pets",
            "type": "tag",
            "expanded": true,
            "items": [
                {"id": "op/list", "name": "List pets", "type": "operation", "httpVerb": "get"}
            ]
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.item_type, ItemType::Tag);
        assert!(item.expanded);
        assert!(!item.active);
        assert_eq!(item.items.len(), 1);
        assert_eq!(item.items[0].http_verb, Some(HttpVerb::Get));
        assert!(item.items[0].items.is_empty());
    }

    #[test]
    fn test_deserialize_unknown_menu_type() {
        let json = r#"{"id": "x", "type": "webhook"}"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.item_type, ItemType::Other);
    }
}
