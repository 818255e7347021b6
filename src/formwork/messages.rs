//! # Validation Messages
//!
//! Validation happens elsewhere; by the time a form is rendered, errors sit in
//! a request-scoped store keyed by field name. Controls only read from it,
//! through the [`MessageStore`] trait.
//!
//! ## Implementations
//!
//! - [`MessageBag`]: one `field -> messages` bag.
//! - [`ErrorBags`]: several named bags, as flashed to a session after a failed
//!   submit. Lookups go through the [`DEFAULT_BAG`]; a missing bag behaves like
//!   an empty one.
//! - [`NoMessages`]: always empty.
//!
//! Bags deserialize from JSON, which is how they usually arrive from a session
//! payload:
//!
//! ```rust
//! use formwork::messages::{ErrorBags, MessageStore};
//!
//! let bags: ErrorBags =
//!     serde_json::from_str(r#"{ "default": { "email": ["Required field"] } }"#).unwrap();
//! assert_eq!(bags.messages_for_field("email"), vec!["Required field"]);
//! assert!(bags.messages_for_field("name").is_empty());
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Bag consulted when a control imports its errors.
pub const DEFAULT_BAG: &str = "default";

/// Read-only source of field-keyed validation messages.
pub trait MessageStore {
    /// Messages recorded for `field`, in insertion order; empty when none.
    fn messages_for_field(&self, field: &str) -> Vec<String>;
}

/// Ordered `field -> messages` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag {
    messages: IndexMap<String, Vec<String>>,
}

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.messages
            .entry(field.to_string())
            .or_default()
            .push(message.into());
        self
    }

    pub fn has(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.messages.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn messages(&self) -> &IndexMap<String, Vec<String>> {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageStore for MessageBag {
    fn messages_for_field(&self, field: &str) -> Vec<String> {
        self.get(field).to_vec()
    }
}

/// Named message bags; reads go through [`DEFAULT_BAG`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBags {
    bags: IndexMap<String, MessageBag>,
}

impl ErrorBags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_bag(&self, name: &str) -> bool {
        self.bags.contains_key(name)
    }

    pub fn bag(&self, name: &str) -> Option<&MessageBag> {
        self.bags.get(name)
    }

    /// Returns the named bag, creating it when absent.
    pub fn bag_mut(&mut self, name: &str) -> &mut MessageBag {
        self.bags.entry(name.to_string()).or_default()
    }

    pub fn put(&mut self, name: &str, bag: MessageBag) -> &mut Self {
        self.bags.insert(name.to_string(), bag);
        self
    }
}

impl MessageStore for ErrorBags {
    fn messages_for_field(&self, field: &str) -> Vec<String> {
        self.bag(DEFAULT_BAG)
            .map(|bag| bag.messages_for_field(field))
            .unwrap_or_default()
    }
}

/// A store with no messages, used when nothing was submitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMessages;

impl MessageStore for NoMessages {
    fn messages_for_field(&self, _field: &str) -> Vec<String> {
        Vec::new()
    }
}
