//! Content tree items.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Discriminant shared by content and menu items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Group,
    Tag,
    Section,
    Operation,
    /// Any type tag this crate does not know about.
    #[serde(other)]
    Other,
}

impl ItemType {
    /// Lowercase tag as it appears in the source tree.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Tag => "tag",
            Self::Section => "section",
            Self::Operation => "operation",
            Self::Other => "other",
        }
    }
}

/// HTTP method of an operation.
///
/// Names are matched without regard to ASCII case. A method outside the
/// known set deserializes to [`HttpVerb::Other`] instead of failing the load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
    Other,
}

impl HttpVerb {
    const KNOWN: [Self; 8] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Head,
        Self::Options,
        Self::Trace,
    ];

    /// Parse a method name. Unrecognized names yield `Other`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Other)
    }

    /// Lowercase method name, used for badge classes and labels.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
            Self::Options => "options",
            Self::Trace => "trace",
            Self::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for HttpVerb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to documentation hosted elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExternalDocs {
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Operation-specific fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationData {
    pub http_verb: HttpVerb,
    pub path: String,
    #[serde(default)]
    pub deprecated: bool,
}

/// Type-specific payload of a [`ContentItem`], tagged by the `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentKind {
    Group,
    Tag,
    Section,
    Operation(OperationData),
    #[serde(other)]
    Other,
}

/// A node of the content tree.
///
/// `id` is expected to be unique across the whole tree; nothing here enforces
/// that (see [`duplicate_ids`](crate::duplicate_ids)).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub external_docs: Option<ExternalDocs>,
    /// Heading depth. Values that are not a small non-negative integer read
    /// as absent.
    #[serde(default, deserialize_with = "lenient_level")]
    pub level: Option<u8>,
    /// Children in document order. `None` means leaf.
    #[serde(default)]
    pub items: Option<Vec<ContentItem>>,
    #[serde(flatten)]
    pub kind: ContentKind,
}

fn lenient_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|level| u8::try_from(level).ok()))
}

impl ContentItem {
    fn new(id: impl Into<String>, name: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            external_docs: None,
            level: None,
            items: None,
            kind,
        }
    }

    /// Create a group item.
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContentKind::Group)
    }

    /// Create a tag item.
    pub fn tag(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContentKind::Tag)
    }

    /// Create a section item.
    pub fn section(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, ContentKind::Section)
    }

    /// Create an operation item. `name` is the operation summary.
    pub fn operation(
        id: impl Into<String>,
        name: impl Into<String>,
        http_verb: HttpVerb,
        path: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            ContentKind::Operation(OperationData {
                http_verb,
                path: path.into(),
                deprecated: false,
            }),
        )
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<ContentItem>) -> Self {
        self.items = Some(items);
        self
    }

    /// Mark an operation as deprecated. No effect on other kinds.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        if let ContentKind::Operation(op) = &mut self.kind {
            op.deprecated = true;
        }
        self
    }

    /// Type tag of this item.
    #[must_use]
    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ContentKind::Group => ItemType::Group,
            ContentKind::Tag => ItemType::Tag,
            ContentKind::Section => ItemType::Section,
            ContentKind::Operation(_) => ItemType::Operation,
            ContentKind::Other => ItemType::Other,
        }
    }

    /// Operation fields, if this is an operation.
    #[must_use]
    pub fn operation_data(&self) -> Option<&OperationData> {
        match &self.kind {
            ContentKind::Operation(op) => Some(op),
            _ => None,
        }
    }

    /// Children, or an empty slice for leaves.
    #[must_use]
    pub fn children(&self) -> &[ContentItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_tag_with_children() {
        let json = r#"{
            "id": "tag/pets",
            "type": "tag",
            "name": "Pets",
            "level": 2,
            "description": "Everything about pets",
            "externalDocs": {"url": "https://example.com/pets"},
            "items": [
                {"id": "op/list", "type": "operation", "name": "List pets",
                 "httpVerb": "get", "path": "/pets"}
            ]
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.item_type(), ItemType::Tag);
        assert_eq!(item.level, Some(2));
        assert_eq!(item.description.as_deref(), Some("Everything about pets"));
        assert_eq!(
            item.external_docs,
            Some(ExternalDocs {
                url: "https://example.com/pets".to_owned(),
                description: None,
            })
        );
        let child = &item.children()[0];
        assert_eq!(
            child.operation_data(),
            Some(&OperationData {
                http_verb: HttpVerb::Get,
                path: "/pets".to_owned(),
                deprecated: false,
            })
        );
        assert!(child.items.is_none());
    }

    #[test]
    fn test_deserialize_deprecated_operation() {
        let json = r#"{"id": "op/rm", "type": "operation", "name": "Remove",
                       "httpVerb": "delete", "path": "/pets/{id}", "deprecated": true}"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();

        assert!(item.operation_data().unwrap().deprecated);
    }

    #[test]
    fn test_deserialize_unknown_type_falls_back_to_other() {
        let json = r#"{"id": "x", "type": "webhook", "name": "Hook"}"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.kind, ContentKind::Other);
        assert_eq!(item.item_type(), ItemType::Other);
    }

    #[test]
    fn test_deserialize_group_without_name() {
        let json = r#"{"id": "g", "type": "group"}"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.kind, ContentKind::Group);
        assert_eq!(item.name, "");
        assert!(item.children().is_empty());
    }

    #[test]
    fn test_deserialize_unlisted_and_uppercase_verbs() {
        let json = r#"[
            {"id": "q", "type": "operation", "name": "Search",
             "httpVerb": "query", "path": "/pets/search"},
            {"id": "g", "type": "operation", "name": "Fetch",
             "httpVerb": "GET", "path": "/pets"}
        ]"#;

        let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0].operation_data().unwrap().http_verb, HttpVerb::Other);
        assert_eq!(items[0].operation_data().unwrap().path, "/pets/search");
        assert_eq!(items[1].operation_data().unwrap().http_verb, HttpVerb::Get);
    }

    #[test]
    fn test_deserialize_out_of_range_level_reads_as_absent() {
        let json = r#"[
            {"id": "a", "type": "tag", "name": "A", "level": 300},
            {"id": "b", "type": "tag", "name": "B", "level": -1},
            {"id": "c", "type": "tag", "name": "C", "level": "2"},
            {"id": "d", "type": "tag", "name": "D", "level": null},
            {"id": "e", "type": "tag", "name": "E", "level": 2}
        ]"#;

        let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();

        let levels: Vec<_> = items.iter().map(|item| item.level).collect();
        assert_eq!(levels, vec![None, None, None, None, Some(2)]);
    }

    #[test]
    fn test_deprecated_builder_ignores_non_operations() {
        let item = ContentItem::tag("t", "Tag").deprecated();

        assert_eq!(item.kind, ContentKind::Tag);
    }

    #[test]
    fn test_http_verb_display() {
        assert_eq!(HttpVerb::Patch.to_string(), "patch");
        assert_eq!(HttpVerb::from_name("Options"), HttpVerb::Options);
        assert_eq!(HttpVerb::from_name("copy").to_string(), "other");
        assert_eq!(ItemType::Section.as_str(), "section");
    }
}
