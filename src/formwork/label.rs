//! Control captions.
//!
//! A [`Label`] is owned by the control it captions but only remembers that
//! control by [`ControlId`]. The back-reference is assigned once: after a label
//! is bound, it stays bound to the same control.

use crate::control::ControlId;
use crate::error::{FormError, Result};
use crate::template::Context;
use crate::view::View;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    text: String,
    info: String,
    control: Option<ControlId>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_info(text, "")
    }

    /// Creates a label with a secondary hint line (tooltip or help text).
    pub fn with_info(text: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            info: info.into(),
            control: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn set_info(&mut self, info: impl Into<String>) -> &mut Self {
        self.info = info.into();
        self
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    pub fn control(&self) -> Option<ControlId> {
        self.control
    }

    /// Binds the label to a control.
    ///
    /// Re-binding to the same control is a no-op; binding to a different one
    /// fails with [`FormError::LabelAlreadyBound`].
    pub fn set_control(&mut self, control: ControlId) -> Result<()> {
        match self.control {
            None => {
                self.control = Some(control);
                Ok(())
            }
            Some(bound) if bound == control => Ok(()),
            Some(_) => Err(FormError::LabelAlreadyBound),
        }
    }

    pub(crate) fn bind_if_unbound(&mut self, control: ControlId) {
        if self.control.is_none() {
            self.control = Some(control);
        }
    }

    /// Renders the label through the configured label template.
    pub fn render(&self, view: &View<'_>) -> Result<String> {
        let mut context = Context::new();
        context.insert("text".into(), json!(self.text));
        context.insert("info".into(), json!(self.info));
        context.insert("control_id".into(), serde_json::to_value(self.control)?);
        view.dispatch(&view.config().label_template, &context)
    }
}

/// Anything [`Control::set_label`](crate::control::Control::set_label) accepts:
/// a ready-made [`Label`] or the caption text for a new one.
#[derive(Debug, Clone)]
pub enum LabelInput {
    Label(Label),
    Text(String),
}

impl LabelInput {
    /// Resolves to a label, building one from text and `info` when needed.
    /// `info` is ignored for ready-made labels.
    pub(crate) fn into_label(self, info: &str) -> Label {
        match self {
            LabelInput::Label(label) => label,
            LabelInput::Text(text) => Label::with_info(text, info),
        }
    }
}

impl From<Label> for LabelInput {
    fn from(label: Label) -> Self {
        LabelInput::Label(label)
    }
}

impl From<&str> for LabelInput {
    fn from(text: &str) -> Self {
        LabelInput::Text(text.to_string())
    }
}

impl From<String> for LabelInput {
    fn from(text: String) -> Self {
        LabelInput::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::RecordingResolver;

    #[test]
    fn new_label_is_unbound() {
        let label = Label::new("Email");
        assert_eq!(label.text(), "Email");
        assert_eq!(label.info(), "");
        assert!(!label.has_control());
    }

    #[test]
    fn set_control_is_single_assignment() {
        let first = ControlId::new();
        let second = ControlId::new();
        let mut label = Label::new("Email");

        label.set_control(first).unwrap();
        assert!(label.set_control(first).is_ok());
        assert!(matches!(
            label.set_control(second),
            Err(FormError::LabelAlreadyBound)
        ));
        assert_eq!(label.control(), Some(first));
    }

    #[test]
    fn text_input_uses_info() {
        let label = LabelInput::from("Password").into_label("At least 8 characters");
        assert_eq!(label.text(), "Password");
        assert_eq!(label.info(), "At least 8 characters");
    }

    #[test]
    fn label_input_ignores_info() {
        let label = LabelInput::from(Label::with_info("Name", "kept")).into_label("dropped");
        assert_eq!(label.info(), "kept");
    }

    #[test]
    fn setters_update_rendered_context() {
        let resolver = RecordingResolver::new();
        let view = View::new(&resolver);
        let mut label = Label::new("Email");
        label.set_text("Work email").set_info("Used for invoices");

        assert_eq!(label.render(&view).unwrap(), "Work email");
        let call = resolver.last_call("label").unwrap();
        assert_eq!(call["info"], "Used for invoices");
    }

    #[test]
    fn render_dispatches_label_template() {
        let resolver = RecordingResolver::new();
        let view = View::new(&resolver);
        let label = Label::with_info("Email", "Work address");

        let html = label.render(&view).unwrap();

        assert_eq!(html, "Email");
        let call = resolver.last_call("label").unwrap();
        assert_eq!(call["info"], "Work address");
        assert!(call["control_id"].is_null());
    }
}
