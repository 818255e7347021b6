//! Layout configuration placed around a rendered control.
//!
//! The core only stores and merges these values; the layout template decides
//! what they mean.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Grid column class every control starts with.
pub const DEFAULT_WRAPPER_CLASS: &str = "col-dt-12";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wrapper {
    entries: IndexMap<String, String>,
}

impl Default for Wrapper {
    fn default() -> Self {
        let mut entries = IndexMap::new();
        entries.insert("class".to_string(), DEFAULT_WRAPPER_CLASS.to_string());
        Self { entries }
    }
}

impl Wrapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// A wrapper with no entries at all, not even the default class.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn class(&self) -> Option<&str> {
        self.get("class")
    }

    /// Merges `other` into this wrapper; keys from `other` win.
    pub fn merge(&mut self, other: &Wrapper) -> &mut Self {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Wrapper {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_grid_class() {
        assert_eq!(Wrapper::default().class(), Some("col-dt-12"));
    }

    #[test]
    fn merge_overrides_and_extends() {
        let mut wrapper = Wrapper::default();
        let other: Wrapper = [("class", "col-dt-6"), ("id", "email-row")]
            .into_iter()
            .collect();

        wrapper.merge(&other);

        assert_eq!(wrapper.class(), Some("col-dt-6"));
        assert_eq!(wrapper.get("id"), Some("email-row"));
    }

    #[test]
    fn empty_has_no_entries() {
        let mut wrapper = Wrapper::empty();
        assert_eq!(wrapper.class(), None);
        assert_eq!(wrapper.iter().count(), 0);

        wrapper.merge(&Wrapper::default());
        assert_eq!(wrapper.class(), Some("col-dt-12"));
    }

    #[test]
    fn serializes_as_flat_map() {
        let mut wrapper = Wrapper::default();
        wrapper.set("data-row", "1");
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"class":"col-dt-12","data-row":"1"}"#);
    }
}
