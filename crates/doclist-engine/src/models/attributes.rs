use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the list item a block belongs to. Blocks sharing this value form one item.
pub const LIST_ITEM_ID: &str = "listItemId";
/// Nesting depth of a list block, 0 for top level
pub const LIST_INDENT: &str = "listIndent";
pub const LIST_TYPE: &str = "listType";
/// Numbering direction of an ordered list
pub const LIST_REVERSED: &str = "listReversed";
pub const LIST_START: &str = "listStart";

/// Value stored under an attribute key on a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl AttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(value) => write!(f, "{value}"),
            AttributeValue::Int(value) => write!(f, "{value}"),
            AttributeValue::Str(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

impl From<ListType> for AttributeValue {
    fn from(value: ListType) -> Self {
        AttributeValue::Str(value.as_str().to_string())
    }
}

/// Kind of list a list block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Numbered,
    Bulleted,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::Numbered => "numbered",
            ListType::Bulleted => "bulleted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "numbered" => Some(ListType::Numbered),
            "bulleted" => Some(ListType::Bulleted),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_type_string_roundtrip() {
        for list_type in [ListType::Numbered, ListType::Bulleted] {
            assert_eq!(ListType::parse(list_type.as_str()), Some(list_type));
        }
        assert_eq!(ListType::parse("todo"), None);
    }

    #[test]
    fn test_attribute_value_accessors() {
        assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
        assert_eq!(AttributeValue::from(3i64).as_int(), Some(3));
        assert_eq!(AttributeValue::from("a").as_str(), Some("a"));
        assert_eq!(AttributeValue::from(true).as_int(), None);
        assert_eq!(
            AttributeValue::from(ListType::Numbered),
            AttributeValue::Str("numbered".to_string())
        );
    }

    #[test]
    fn test_attribute_value_display() {
        assert_eq!(AttributeValue::Bool(true).to_string(), "true");
        assert_eq!(AttributeValue::Int(4).to_string(), "4");
        assert_eq!(AttributeValue::from("numbered").to_string(), "numbered");
    }
}
