//! Attribute value type.
//!
//! HTML attributes are mostly text, but boolean attributes (`disabled`,
//! `data-alt-datetimepicker`) and explicit null fallbacks also occur. Values
//! serialize untagged. Booleans serialize as the attribute text (`"true"`,
//! `"false"`) so templates print them the way the markup expects.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Runtime representation of a single attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Explicit absence, e.g. a fallback of "nothing" materialized by a lazy read.
    Null,

    /// Boolean attribute (`disabled`, `required`, data flags)
    Bool(bool),

    Number(i64),

    Text(String),
}

impl AttrValue {
    /// Get the string value if this is a Text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean value if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Null => serializer.serialize_none(),
            AttrValue::Bool(v) => serializer.collect_str(v),
            AttrValue::Number(n) => serializer.serialize_i64(*n),
            AttrValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => Ok(()),
            AttrValue::Bool(v) => write!(f, "{}", v),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}
