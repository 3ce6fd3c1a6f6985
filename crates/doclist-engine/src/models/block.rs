use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::models::attributes::{
    AttributeValue, LIST_INDENT, LIST_ITEM_ID, LIST_TYPE, ListType,
};

/// Stable identifier of a block, unaffected by attribute changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate a fresh value for the `listItemId` attribute
pub fn new_list_item_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    /// Selectable as a whole and carries no text (images, embeds)
    Object { name: String },
}

/// A top-level paragraph-like node of the document
///
/// List structure is not expressed by nesting. A block is part of a list when it
/// carries a `listItemId`; `listIndent` gives its depth and every block of the
/// same item repeats the list attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    kind: BlockKind,
    text: String,
    attributes: BTreeMap<String, AttributeValue>,
}

impl Block {
    pub fn new(kind: BlockKind, text: &str) -> Self {
        Self {
            id: BlockId::new(),
            kind,
            text: text.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn paragraph(text: &str) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    pub fn heading(level: u8, text: &str) -> Self {
        Self::new(BlockKind::Heading { level }, text)
    }

    pub fn object(name: &str) -> Self {
        Self::new(
            BlockKind::Object {
                name: name.to_string(),
            },
            "",
        )
    }

    /// Paragraph carrying the attributes that make it part of a list item
    pub fn list_item(text: &str, item_id: &str, indent: i64, list_type: ListType) -> Self {
        Self::paragraph(text).into_list_item(item_id, indent, list_type)
    }

    pub fn into_list_item(self, item_id: &str, indent: i64, list_type: ListType) -> Self {
        self.with_attribute(LIST_ITEM_ID, item_id)
            .with_attribute(LIST_INDENT, indent)
            .with_attribute(LIST_TYPE, list_type)
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters (selection offsets are character based)
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, BlockKind::Object { .. })
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn list_indent(&self) -> Option<i64> {
        self.attribute(LIST_INDENT).and_then(AttributeValue::as_int)
    }

    pub fn list_type(&self) -> Option<ListType> {
        self.attribute(LIST_TYPE)
            .and_then(AttributeValue::as_str)
            .and_then(ListType::parse)
    }

    pub fn list_item_id(&self) -> Option<&str> {
        self.attribute(LIST_ITEM_ID).and_then(AttributeValue::as_str)
    }

    /// Replace (or remove with `None`) an attribute, returning the previous value
    pub(crate) fn replace_attribute(
        &mut self,
        key: &str,
        value: Option<AttributeValue>,
    ) -> Option<AttributeValue> {
        match value {
            Some(value) => self.attributes.insert(key.to_string(), value),
            None => self.attributes.remove(key),
        }
    }
}
