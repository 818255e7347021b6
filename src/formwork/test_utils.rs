//! Test fixtures shared by unit tests and downstream crates (feature `test_utils`).

pub mod fixtures {
    use crate::error::{FormError, Result};
    use crate::template::{Context, TemplateResolver};
    use std::cell::RefCell;

    /// Resolver that records every dispatch and renders placeholders.
    ///
    /// The label template (`label` by default) renders the label text, so
    /// layout contexts show real captions; every other template renders as
    /// `<name>`.
    pub struct RecordingResolver {
        label_template: String,
        calls: RefCell<Vec<(String, Context)>>,
    }

    impl Default for RecordingResolver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RecordingResolver {
        pub fn new() -> Self {
            Self::with_label_template("label")
        }

        pub fn with_label_template(name: &str) -> Self {
            Self {
                label_template: name.to_string(),
                calls: RefCell::new(Vec::new()),
            }
        }

        /// Template names in dispatch order.
        pub fn calls(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|(name, _)| name.clone())
                .collect()
        }

        pub fn call_count(&self, template: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|(name, _)| name == template)
                .count()
        }

        /// Context of the most recent dispatch of `template`.
        pub fn last_call(&self, template: &str) -> Option<Context> {
            self.calls
                .borrow()
                .iter()
                .rev()
                .find(|(name, _)| name == template)
                .map(|(_, context)| context.clone())
        }
    }

    impl TemplateResolver for RecordingResolver {
        fn render(&self, name: &str, context: &Context) -> Result<String> {
            self.calls
                .borrow_mut()
                .push((name.to_string(), context.clone()));

            if name == self.label_template {
                let text = context
                    .get("text")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default();
                return Ok(text.to_string());
            }
            Ok(format!("<{}>", name))
        }
    }

    /// Resolver that fails every dispatch with a fixed message.
    pub struct FailingResolver {
        message: String,
    }

    impl FailingResolver {
        pub fn new(message: &str) -> Self {
            Self {
                message: message.to_string(),
            }
        }
    }

    impl TemplateResolver for FailingResolver {
        fn render(&self, _name: &str, _context: &Context) -> Result<String> {
            Err(FormError::Resolver(self.message.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::template::{Context, TemplateResolver};
    use serde_json::json;

    #[test]
    fn recording_resolver_tracks_calls() {
        let resolver = RecordingResolver::new();
        resolver.render("controls.text", &Context::new()).unwrap();
        resolver.render("vertical", &Context::new()).unwrap();
        resolver.render("controls.text", &Context::new()).unwrap();

        assert_eq!(
            resolver.calls(),
            vec!["controls.text", "vertical", "controls.text"]
        );
        assert_eq!(resolver.call_count("controls.text"), 2);
    }

    #[test]
    fn recording_resolver_renders_label_text() {
        let resolver = RecordingResolver::new();
        let mut context = Context::new();
        context.insert("text".into(), json!("Email"));
        assert_eq!(resolver.render("label", &context).unwrap(), "Email");
    }

    #[test]
    fn failing_resolver_returns_message() {
        let resolver = FailingResolver::new("template [vertical] not found");
        let err = resolver.render("vertical", &Context::new()).unwrap_err();
        assert_eq!(err.to_string(), "template [vertical] not found");
    }
}
