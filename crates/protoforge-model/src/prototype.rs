//! Prototype records
//!
//! A prototype is an entity definition: identity fields, an ordered list of
//! [`Component`]s and arbitrary extra fields.
//!
//! # Serialized key order
//!
//! Output order is fixed regardless of how the record was built:
//!
//! ```text
//! type, [abstract], [parent], id, name, description, components, <extra...>
//! ```
//!
//! - `abstract` only when the flag is set
//! - `parent` only when set and non-empty
//! - `id`, `name`, `description` always, as `null` when unset
//! - `components` always, as an empty sequence when there are none
//! - extra fields in insertion order

use crate::component::{Component, TYPE_KEY};
use crate::styleguide::styleguide_rank;
use crate::value::{fields_to_yaml, FieldValue, Fields};
use serde_yaml::Value;

/// Default prototype kind
pub const DEFAULT_KIND: &str = "entity";

/// Serialized key of the abstract flag
pub const ABSTRACT_KEY: &str = "abstract";
/// Serialized key of the parent reference
pub const PARENT_KEY: &str = "parent";
/// Serialized key of the identifier
pub const ID_KEY: &str = "id";
/// Serialized key of the display name
pub const NAME_KEY: &str = "name";
/// Serialized key of the description
pub const DESCRIPTION_KEY: &str = "description";
/// Serialized key of the component list
pub const COMPONENTS_KEY: &str = "components";

/// Keys owned by the fixed prototype fields, in serialized order
pub const FIXED_KEYS: [&str; 7] = [
    TYPE_KEY,
    ABSTRACT_KEY,
    PARENT_KEY,
    ID_KEY,
    NAME_KEY,
    DESCRIPTION_KEY,
    COMPONENTS_KEY,
];

/// Entity definition record
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    kind: String,
    is_abstract: bool,
    parent: Option<String>,
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    components: Vec<Component>,
    extra: Fields,
}

impl Default for Prototype {
    fn default() -> Self {
        Self::new()
    }
}

impl Prototype {
    /// Create empty prototype of the default `entity` kind
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            is_abstract: false,
            parent: None,
            id: None,
            name: None,
            description: None,
            components: Vec::new(),
            extra: Fields::new(),
        }
    }

    /// Set kind
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Mark as abstract
    #[must_use]
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// Set parent reference
    ///
    /// The reference is not resolved or validated here.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append one component
    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Append several components, keeping their order
    #[must_use]
    pub fn with_components(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.components.extend(components);
        self
    }

    /// Add an extra field, builder style
    #[must_use]
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert_extra(name, value);
        self
    }

    /// Insert or replace an extra field, returning the previous value
    ///
    /// Names of the fixed fields (see [`FIXED_KEYS`]) are refused: the record
    /// is left untouched and `None` is returned.
    pub fn insert_extra(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let name = name.into();
        if FIXED_KEYS.contains(&name.as_str()) {
            tracing::warn!(
                id = self.id.as_deref().unwrap_or_default(),
                "refusing extra field '{name}' that shadows a fixed prototype key"
            );
            return None;
        }
        self.extra.insert(name, value.into())
    }

    /// Append a component
    pub fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Prototype kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the prototype is abstract
    #[inline]
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Parent reference
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Description
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Components in declared order
    #[inline]
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Mutable component list
    #[inline]
    pub fn components_mut(&mut self) -> &mut Vec<Component> {
        &mut self.components
    }

    /// Extra fields in insertion order
    #[inline]
    #[must_use]
    pub fn extra(&self) -> &Fields {
        &self.extra
    }

    /// Reorder components by styleguide rank
    ///
    /// Never applied by [`Prototype::serialize`]; declared order is kept
    /// unless the caller asks for this. The sort is stable, so components of
    /// equal rank keep their relative order.
    pub fn sort_components_by_styleguide(&mut self) {
        self.components.sort_by_key(|c| styleguide_rank(c.kind()));
    }

    /// Serialize to an ordered mapping following the fixed key order
    #[must_use]
    pub fn serialize(&self) -> Fields {
        let mut record = Fields::with_capacity(FIXED_KEYS.len() + self.extra.len());

        record.insert(TYPE_KEY.to_string(), FieldValue::from(self.kind.as_str()));
        if self.is_abstract {
            record.insert(ABSTRACT_KEY.to_string(), FieldValue::Bool(true));
        }
        if let Some(parent) = self.parent.as_deref().filter(|p| !p.is_empty()) {
            record.insert(PARENT_KEY.to_string(), FieldValue::from(parent));
        }
        record.insert(ID_KEY.to_string(), FieldValue::from(self.id.clone()));
        record.insert(NAME_KEY.to_string(), FieldValue::from(self.name.clone()));
        record.insert(
            DESCRIPTION_KEY.to_string(),
            FieldValue::from(self.description.clone()),
        );
        record.insert(
            COMPONENTS_KEY.to_string(),
            FieldValue::Sequence(
                self.components
                    .iter()
                    .map(|c| FieldValue::Mapping(c.serialize()))
                    .collect(),
            ),
        );

        for (name, value) in &self.extra {
            record.insert(name.clone(), value.clone());
        }

        record
    }

    /// Serialize straight into a YAML value
    #[must_use]
    pub fn to_yaml_value(&self) -> Value {
        Value::Mapping(fields_to_yaml(&self.serialize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(record: &Fields) -> Vec<&str> {
        record.keys().map(String::as_str).collect()
    }

    #[test]
    fn default_prototype_layout() {
        let record = Prototype::new().serialize();

        assert_eq!(
            keys(&record),
            vec!["type", "id", "name", "description", "components"]
        );
        assert_eq!(record["type"], FieldValue::from("entity"));
        assert!(record["id"].is_null());
        assert!(record["name"].is_null());
        assert!(record["description"].is_null());
        assert_eq!(record["components"], FieldValue::Sequence(Vec::new()));
    }

    #[test]
    fn order_independent_of_construction() {
        let record = Prototype::new()
            .with_extra("suffix", "left")
            .with_description("A door.")
            .with_component(Component::new("Sprite"))
            .with_name("door")
            .with_id("Door")
            .with_parent("BaseStructure")
            .with_extra("noSpawn", true)
            .serialize();

        assert_eq!(
            keys(&record),
            vec![
                "type",
                "parent",
                "id",
                "name",
                "description",
                "components",
                "suffix",
                "noSpawn"
            ]
        );
    }

    #[test]
    fn empty_parent_is_omitted() {
        let record = Prototype::new().with_parent("").with_id("X").serialize();
        assert!(!record.contains_key("parent"));
    }

    #[test]
    fn abstract_only_when_set() {
        let plain = Prototype::new().serialize();
        assert!(!plain.contains_key("abstract"));

        let record = Prototype::new()
            .with_abstract(true)
            .with_parent("Base")
            .serialize();
        assert_eq!(&keys(&record)[..3], &["type", "abstract", "parent"]);
        assert_eq!(record["abstract"], FieldValue::Bool(true));
    }

    #[test]
    fn components_keep_declared_order() {
        let record = Prototype::new()
            .with_component(Component::new("Physics"))
            .with_component(Component::new("Sprite"))
            .with_component(Component::new("Icon"))
            .serialize();

        let kinds: Vec<_> = record["components"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|c| c.as_mapping().unwrap()["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["Physics", "Sprite", "Icon"]);
    }

    #[test]
    fn fixed_key_extras_are_refused() {
        let mut prototype = Prototype::new().with_id("Door");
        for key in FIXED_KEYS {
            assert_eq!(prototype.insert_extra(key, "shadow"), None);
        }
        assert!(prototype.extra().is_empty());
        assert_eq!(prototype.serialize()["id"], FieldValue::from("Door"));
    }

    #[test]
    fn styleguide_sort_is_opt_in_and_stable() {
        let mut prototype = Prototype::new().with_components([
            Component::new("Physics"),
            Component::new("Custom").with_field("n", 1),
            Component::new("Icon"),
            Component::new("Custom").with_field("n", 2),
            Component::new("Sprite"),
        ]);

        let before: Vec<_> = prototype.components().iter().map(Component::kind).collect();
        assert_eq!(before, vec!["Physics", "Custom", "Icon", "Custom", "Sprite"]);

        prototype.sort_components_by_styleguide();
        let after: Vec<_> = prototype.components().iter().map(Component::kind).collect();
        assert_eq!(after, vec!["Sprite", "Icon", "Physics", "Custom", "Custom"]);
        assert_eq!(prototype.components()[3].get("n"), Some(&FieldValue::Int(1)));
    }

    #[test]
    fn yaml_value_renders_block_style() {
        let prototype = Prototype::new()
            .with_id("BigDoor")
            .with_name("big door")
            .with_description("")
            .with_component(Component::new("Sprite").with_field("sprite", ""));

        let text = serde_yaml::to_string(&prototype.to_yaml_value()).unwrap();
        assert_eq!(
            text,
            "type: entity\nid: BigDoor\nname: big door\ndescription: ''\ncomponents:\n- type: Sprite\n  sprite: ''\n"
        );
    }
}
