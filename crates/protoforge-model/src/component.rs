//! Component records
//!
//! A component is one behavior attached to a prototype: a `kind` plus an
//! open set of named fields. Serialization puts `type` first and the fields
//! after it in the order they were supplied.

use crate::value::{FieldValue, Fields};

/// Serialized key holding a record's kind
pub const TYPE_KEY: &str = "type";

/// One attached behavior on a prototype
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: String,
    fields: Fields,
}

impl Component {
    /// Create component of given kind with no fields
    #[inline]
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Fields::new(),
        }
    }

    /// Add a field, builder style
    ///
    /// A field named `type` is refused, see [`Component::insert`].
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field, returning the previous value
    ///
    /// The `type` key is reserved for the kind; inserting it leaves the
    /// component untouched and returns `None`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let name = name.into();
        if name == TYPE_KEY {
            tracing::warn!(
                kind = %self.kind,
                "refusing reserved field '{}' on component",
                TYPE_KEY
            );
            return None;
        }
        self.fields.insert(name, value.into())
    }

    /// Component kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Get field by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// All fields in insertion order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Remove a field, keeping the order of the remaining ones
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(name)
    }

    /// Serialize to an ordered mapping: `type` first, then fields
    #[must_use]
    pub fn serialize(&self) -> Fields {
        let mut record = Fields::with_capacity(self.fields.len() + 1);
        record.insert(TYPE_KEY.to_string(), FieldValue::from(self.kind.as_str()));
        for (name, value) in &self.fields {
            record.insert(name.clone(), value.clone());
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_is_first_then_supplied_order() {
        let component = Component::new("Sprite")
            .with_field("state", "closed")
            .with_field("sprite", "Structures/door.rsi")
            .with_field("drawdepth", 4);

        let record = component.serialize();
        let keys: Vec<_> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "state", "sprite", "drawdepth"]);
        assert_eq!(record["type"], FieldValue::from("Sprite"));
    }

    #[test]
    fn reserved_type_field_is_refused() {
        let mut component = Component::new("Icon");
        assert_eq!(component.insert("type", "Sprite"), None);
        assert!(component.get("type").is_none());
        assert_eq!(component.serialize()["type"], FieldValue::from("Icon"));
    }

    #[test]
    fn replacing_field_keeps_position() {
        let mut component = Component::new("Physics")
            .with_field("mass", 10)
            .with_field("friction", 0.4);

        let previous = component.insert("mass", 20);
        assert_eq!(previous, Some(FieldValue::Int(10)));

        let keys: Vec<_> = component.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mass", "friction"]);
    }

    #[test]
    fn remove_field() {
        let mut component = Component::new("Collidable")
            .with_field("a", 1)
            .with_field("b", 2)
            .with_field("c", 3);

        assert_eq!(component.remove("b"), Some(FieldValue::Int(2)));
        let keys: Vec<_> = component.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn empty_component_serializes_kind_only() {
        let record = Component::new("SnapGrid").serialize();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("type").and_then(FieldValue::as_str), Some("SnapGrid"));
    }
}
