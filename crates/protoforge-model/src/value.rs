//! Open-mapping field values
//!
//! Prototypes and components carry arbitrary extra fields without a static
//! schema. Each field holds a [`FieldValue`], and a set of named fields is an
//! insertion-ordered [`Fields`] map so that serialized key order always
//! matches construction order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::{Mapping, Number, Value};

/// Ordered mapping from field name to value
pub type Fields = IndexMap<String, FieldValue>;

/// A single structured field value
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent value, emitted as `null`
    #[default]
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// String scalar
    String(String),
    /// Ordered list of values
    Sequence(Vec<FieldValue>),
    /// Nested ordered mapping
    Mapping(Fields),
}

impl FieldValue {
    /// Check for the null value
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow as string slice, if this is a string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as nested mapping, if this is a mapping
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Fields> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow as sequence, if this is a sequence
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Convert into a YAML value, preserving mapping key order
    #[must_use]
    pub fn to_yaml(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Number(Number::from(*i)),
            Self::Float(f) => Value::Number(Number::from(*f)),
            Self::String(s) => Value::String(s.clone()),
            Self::Sequence(items) => Value::Sequence(items.iter().map(Self::to_yaml).collect()),
            Self::Mapping(map) => Value::Mapping(fields_to_yaml(map)),
        }
    }
}

/// Convert an ordered field map into a YAML mapping
#[must_use]
pub fn fields_to_yaml(fields: &Fields) -> Mapping {
    let mut mapping = Mapping::with_capacity(fields.len());
    for (key, value) in fields {
        mapping.insert(Value::String(key.clone()), value.to_yaml());
    }
    mapping
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Fields> for FieldValue {
    fn from(value: Fields) -> Self {
        Self::Mapping(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
