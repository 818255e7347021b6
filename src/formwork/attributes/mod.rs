//! # Attribute System
//!
//! Every control carries an ordered bag of HTML attributes. The bag is a plain
//! insertion-ordered map; the [`Attributable`] trait layers the form-building
//! operations on top of it so that both [`AttributeBag`] itself and anything
//! that owns one (a [`Control`](crate::control::Control)) expose the same surface.
//!
//! ## Lazy Defaults
//!
//! Reading an attribute with a fallback *writes* the fallback when the key is
//! absent. That read-with-side-effect is spelled out in the method name,
//! [`Attributable::get_or_insert_attribute`], so call sites show the mutation:
//!
//! ```
//! use formwork::attributes::{Attributable, AttributeBag, AttrValue};
//!
//! let mut bag = AttributeBag::new();
//! assert_eq!(bag.get_or_insert_attribute("rows", 4i64), &AttrValue::Number(4));
//! assert!(bag.has_attribute("rows"));
//! ```
//!
//! Use [`Attributable::attribute`] for a pure lookup.

mod value;

pub use value::AttrValue;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered attribute snapshot.
pub type AttributeMap = IndexMap<String, AttrValue>;

/// Ordered `name -> value` mapping owned by a single control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    entries: AttributeMap,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(entries: AttributeMap) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Attribute operations shared by the bag and its owners.
///
/// Implementors only provide access to the underlying [`AttributeBag`];
/// every operation is a provided method.
pub trait Attributable {
    fn attribute_bag(&self) -> &AttributeBag;

    fn attribute_bag_mut(&mut self) -> &mut AttributeBag;

    /// Pure membership test.
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute_bag().entries.contains_key(name)
    }

    /// Pure lookup; never inserts.
    fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attribute_bag().entries.get(name)
    }

    /// Sets an attribute, overwriting any existing value.
    fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
        self.attribute_bag_mut()
            .entries
            .insert(name.to_string(), value.into());
        self
    }

    /// Sets an attribute only when it is not already present.
    fn set_attribute_if_not_exists(
        &mut self,
        name: &str,
        value: impl Into<AttrValue>,
    ) -> &mut Self {
        if !self.has_attribute(name) {
            self.set_attribute(name, value);
        }
        self
    }

    /// Returns the attribute, first storing `fallback` under `name` if absent.
    fn get_or_insert_attribute(&mut self, name: &str, fallback: impl Into<AttrValue>) -> &AttrValue {
        self.attribute_bag_mut()
            .entries
            .entry(name.to_string())
            .or_insert_with(|| fallback.into())
    }

    /// Removes an attribute, keeping the order of the remaining ones.
    fn remove_attribute(&mut self, name: &str) -> Option<AttrValue> {
        self.attribute_bag_mut().entries.shift_remove(name)
    }

    /// Replaces the whole bag.
    fn set_attributes(&mut self, attributes: AttributeMap) -> &mut Self {
        self.attribute_bag_mut().entries = attributes;
        self
    }

    /// Full snapshot of the current attributes.
    fn get_attributes(&self) -> AttributeMap {
        self.attribute_bag().entries.clone()
    }

    /// Appends a CSS class, space separated, or sets it when no class exists yet.
    fn add_class(&mut self, class: &str) -> &mut Self {
        let merged = match self.attribute("class") {
            Some(existing) => format!("{} {}", existing, class),
            None => class.to_string(),
        };
        self.set_attribute("class", merged)
    }
}

impl Attributable for AttributeBag {
    fn attribute_bag(&self) -> &AttributeBag {
        self
    }

    fn attribute_bag_mut(&mut self) -> &mut AttributeBag {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_has_attribute() {
        let mut bag = AttributeBag::new();
        assert!(!bag.has_attribute("type"));
        bag.set_attribute("type", "email");
        assert!(bag.has_attribute("type"));
        assert_eq!(bag.attribute("type"), Some(&AttrValue::from("email")));
    }

    #[test]
    fn set_attribute_overwrites() {
        let mut bag = AttributeBag::new();
        bag.set_attribute("size", 10i64).set_attribute("size", 20i64);
        assert_eq!(bag.attribute("size"), Some(&AttrValue::Number(20)));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn set_if_not_exists_keeps_existing_value() {
        let mut bag = AttributeBag::new();
        bag.set_attribute("placeholder", "first");
        bag.set_attribute_if_not_exists("placeholder", "second");
        bag.set_attribute_if_not_exists("maxlength", 64i64);
        assert_eq!(bag.attribute("placeholder"), Some(&AttrValue::from("first")));
        assert_eq!(bag.attribute("maxlength"), Some(&AttrValue::Number(64)));
    }

    #[test]
    fn lazy_read_materializes_fallback() {
        let mut bag = AttributeBag::new();
        let value = bag.get_or_insert_attribute("x", "fallback").clone();
        assert_eq!(value, AttrValue::from("fallback"));
        assert!(bag.has_attribute("x"));
    }

    #[test]
    fn lazy_read_with_null_fallback_still_inserts() {
        let mut bag = AttributeBag::new();
        assert!(bag.get_or_insert_attribute("x", AttrValue::Null).is_null());
        assert!(bag.has_attribute("x"));
    }

    #[test]
    fn lazy_read_of_present_key_ignores_fallback() {
        let mut bag = AttributeBag::new();
        bag.set_attribute("x", "kept");
        assert_eq!(bag.get_or_insert_attribute("x", "other"), &AttrValue::from("kept"));
    }

    #[test]
    fn plain_lookup_does_not_insert() {
        let bag = AttributeBag::new();
        assert!(bag.attribute("x").is_none());
        assert!(!bag.has_attribute("x"));
    }

    #[test]
    fn add_class_sets_then_appends() {
        let mut bag = AttributeBag::new();
        bag.add_class("foo");
        assert_eq!(bag.attribute("class"), Some(&AttrValue::from("foo")));
        bag.add_class("bar");
        assert_eq!(bag.attribute("class"), Some(&AttrValue::from("foo bar")));
    }

    #[test]
    fn set_attributes_replaces_everything() {
        let mut bag: AttributeBag = [("a", "1"), ("b", "2")].into_iter().collect();
        let mut replacement = AttributeMap::new();
        replacement.insert("c".into(), AttrValue::from("3"));
        bag.set_attributes(replacement);
        assert!(!bag.has_attribute("a"));
        assert!(!bag.has_attribute("b"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let mut bag = AttributeBag::new();
        bag.set_attribute("name", "email")
            .set_attribute("autocomplete", "off")
            .set_attribute("class", "wide");
        let keys: Vec<String> = bag.get_attributes().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "autocomplete", "class"]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut bag: AttributeBag = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(bag.remove_attribute("b"), Some(AttrValue::from("2")));
        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
