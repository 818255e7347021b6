//! # Controls
//!
//! A [`Control`] is one form field: its identity (name, type, value), its HTML
//! attributes, an optional [`Label`], an optional [`Decorator`], the layout
//! [`Wrapper`] and the validation messages collected for it.
//!
//! ## Rendering
//!
//! [`Control::render`] is the public entry point and never fails: whatever
//! goes wrong while rendering, the caller gets text back. The default pipeline
//! ([`Control::render_default`]) runs in four steps:
//!
//! 1. **Error import**: messages the [`View`]'s store holds for this control's
//!    name are appended to `messages["errors"]`. This runs on *every* render,
//!    so rendering the same control twice imports the same errors twice.
//! 2. **Label**: a control without a label gets one captioned with its
//!    capitalized name, unless its type is the hidden type. The label stays
//!    attached for later renders.
//! 3. **Input body**: the `controls.<type>` template renders with `{ control }`.
//! 4. **Layout**: the `<orientation>` template renders with
//!    `{ label, input, control, errors }` and its output is the result.
//!
//! With a decorator attached, the decorator is called instead and usually
//! delegates back into `render_default` after adjusting the control.
//!
//! ```rust
//! use formwork::control::Control;
//! use formwork::template::TemplateRegistry;
//! use formwork::view::View;
//!
//! let registry = TemplateRegistry::new()
//!     .with_template("controls.text", r#"<input type="text" name="{{ control.name }}">"#)?
//!     .with_template("label", "<label>{{ text }}</label>")?
//!     .with_template("vertical", "{{ label }}{{ input }}")?;
//! let view = View::new(&registry);
//!
//! let mut control = Control::new("email")?;
//! control.set_type("text").set_orientation("vertical");
//!
//! assert_eq!(
//!     control.to_html(&view),
//!     r#"<label>Email</label><input type="text" name="email">"#
//! );
//! # Ok::<(), formwork::error::FormError>(())
//! ```

use crate::attributes::{Attributable, AttributeBag, AttributeMap};
use crate::config::FormConfig;
use crate::decorator::Decorator;
use crate::error::{FormError, Result};
use crate::label::{Label, LabelInput};
use crate::template::Context;
use crate::view::View;
use crate::wrapper::Wrapper;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Message type under which validation errors are collected.
pub const ERRORS: &str = "errors";

/// Message lists keyed by message type, in insertion order.
pub type Messages = IndexMap<String, Vec<String>>;

/// Stable handle a [`Label`] uses to refer back to its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(Uuid);

impl ControlId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControlId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A control's value: one string, or several for multi-value inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ControlValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ControlValue::Single(v) => Some(v),
            ControlValue::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            ControlValue::Single(_) => None,
            ControlValue::Multiple(v) => Some(v),
        }
    }

    /// True if `candidate` is the value, or one of the values.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            ControlValue::Single(v) => v == candidate,
            ControlValue::Multiple(v) => v.iter().any(|item| item == candidate),
        }
    }
}

impl From<&str> for ControlValue {
    fn from(value: &str) -> Self {
        ControlValue::Single(value.to_string())
    }
}

impl From<String> for ControlValue {
    fn from(value: String) -> Self {
        ControlValue::Single(value)
    }
}

impl From<Vec<String>> for ControlValue {
    fn from(values: Vec<String>) -> Self {
        ControlValue::Multiple(values)
    }
}

impl From<Vec<&str>> for ControlValue {
    fn from(values: Vec<&str>) -> Self {
        ControlValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Outcome of [`Control::render`].
///
/// Both variants carry displayable text; `Degraded` holds the message of the
/// failure that replaced the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Markup(String),
    Degraded(String),
}

impl Rendered {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Rendered::Degraded(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Markup(text) | Rendered::Degraded(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Rendered::Markup(text) | Rendered::Degraded(text) => text,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form field.
///
/// Serializes into the `control` entry of template contexts.
#[derive(Serialize)]
pub struct Control {
    #[serde(skip)]
    handle: ControlId,
    id: Option<String>,
    name: String,
    #[serde(rename = "type")]
    control_type: Option<String>,
    value: Option<ControlValue>,
    attributes: AttributeBag,
    label: Option<Label>,
    #[serde(skip)]
    decorator: Option<Arc<dyn Decorator>>,
    messages: Messages,
    orientation: Option<String>,
    wrapper: Wrapper,
    prepend_html: String,
    append_html: String,
}

impl Control {
    /// Creates a control; the name is also stored as the `name` attribute.
    ///
    /// Fails with [`FormError::MissingName`] for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_attributes(name, AttributeMap::new())
    }

    /// Creates a control with initial attributes.
    ///
    /// The `name` attribute always mirrors the control name, whatever
    /// `attributes` contains.
    pub fn with_attributes(name: impl Into<String>, attributes: AttributeMap) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FormError::MissingName);
        }

        let mut attributes = AttributeBag::from_map(attributes);
        attributes.set_attribute("name", &name);

        Ok(Self {
            handle: ControlId::new(),
            id: None,
            name,
            control_type: None,
            value: None,
            attributes,
            label: None,
            decorator: None,
            messages: Messages::new(),
            orientation: None,
            wrapper: Wrapper::default(),
            prepend_html: String::new(),
            append_html: String::new(),
        })
    }

    pub fn handle(&self) -> ControlId {
        self.handle
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the control. The `name` attribute keeps its original value.
    ///
    /// Fails with [`FormError::MissingName`] for an empty name, leaving the
    /// current name in place.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        self.name = name;
        Ok(self)
    }

    pub fn control_type(&self) -> Option<&str> {
        self.control_type.as_deref()
    }

    pub fn set_type(&mut self, control_type: impl Into<String>) -> &mut Self {
        self.control_type = Some(control_type.into());
        self
    }

    pub fn value(&self) -> Option<&ControlValue> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: impl Into<ControlValue>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    pub fn orientation(&self) -> Option<&str> {
        self.orientation.as_deref()
    }

    pub fn set_orientation(&mut self, orientation: impl Into<String>) -> &mut Self {
        self.orientation = Some(orientation.into());
        self
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        let placeholder: String = placeholder.into();
        self.set_attribute("placeholder", placeholder)
    }

    pub fn prepend_html(&self) -> &str {
        &self.prepend_html
    }

    pub fn set_prepend_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.prepend_html = html.into();
        self
    }

    pub fn append_html(&self) -> &str {
        &self.append_html
    }

    pub fn set_append_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.append_html = html.into();
        self
    }

    /// Attaches a label, or builds one from `text` and `info`.
    ///
    /// A label that is not bound to any control yet gets bound to this one.
    /// `info` only applies when a new label is built from text.
    pub fn set_label(&mut self, label: impl Into<LabelInput>, info: &str) -> &mut Self {
        let mut label = label.into().into_label(info);
        label.bind_if_unbound(self.handle);
        self.label = Some(label);
        self
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn label_mut(&mut self) -> Option<&mut Label> {
        self.label.as_mut()
    }

    /// Attaches a decorator, replacing any previous one.
    pub fn set_decorator(&mut self, decorator: Arc<dyn Decorator>) -> &mut Self {
        self.decorator = Some(decorator);
        self
    }

    pub fn decorator(&self) -> Option<&Arc<dyn Decorator>> {
        self.decorator.as_ref()
    }

    pub fn clear_decorator(&mut self) -> &mut Self {
        self.decorator = None;
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Appends a message under `message_type`.
    pub fn add_message(&mut self, message_type: &str, message: impl Into<String>) -> &mut Self {
        self.messages
            .entry(message_type.to_string())
            .or_default()
            .push(message.into());
        self
    }

    pub fn add_error(&mut self, error: impl Into<String>) -> &mut Self {
        self.add_message(ERRORS, error)
    }

    pub fn errors(&self) -> &[String] {
        self.messages
            .get(ERRORS)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn wrapper(&self) -> &Wrapper {
        &self.wrapper
    }

    pub fn wrapper_mut(&mut self) -> &mut Wrapper {
        &mut self.wrapper
    }

    pub fn set_wrapper(&mut self, wrapper: Wrapper) -> &mut Self {
        self.wrapper = wrapper;
        self
    }

    /// Renders the control. Never fails and never panics outward.
    ///
    /// Goes through the decorator when one is attached, otherwise through
    /// [`render_default`](Self::render_default). Any failure, including a
    /// panic in a resolver or decorator, yields [`Rendered::Degraded`] with
    /// the failure's message.
    pub fn render(&mut self, view: &View<'_>) -> Rendered {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch_render(view)))
            .unwrap_or_else(|payload| Err(FormError::Panicked(panic_message(payload))));

        match outcome {
            Ok(html) => Rendered::Markup(html),
            Err(err) => {
                warn!(control = %self.name, error = %err, "control render degraded");
                Rendered::Degraded(err.to_string())
            }
        }
    }

    /// Renders to plain text; failures come back as their message.
    pub fn to_html(&mut self, view: &View<'_>) -> String {
        self.render(view).into_string()
    }

    /// The built-in pipeline: error import, label, input body, layout.
    ///
    /// Decorators call this after adjusting the control. Unlike
    /// [`render`](Self::render) it returns failures to the caller.
    pub fn render_default(&mut self, view: &View<'_>) -> Result<String> {
        self.import_errors(view);
        self.materialize_label(view.config());

        let control_type = self
            .control_type
            .clone()
            .ok_or_else(|| FormError::MissingType {
                control: self.name.clone(),
            })?;
        let orientation = self
            .orientation
            .clone()
            .ok_or_else(|| FormError::MissingOrientation {
                control: self.name.clone(),
            })?;

        let mut context = Context::new();
        context.insert("control".into(), serde_json::to_value(&*self)?);
        let input = view.dispatch(&view.config().control_template(&control_type), &context)?;

        let label = match &self.label {
            Some(label) => label.render(view)?,
            None => String::new(),
        };

        context.insert("label".into(), json!(label));
        context.insert("input".into(), json!(input));
        context.insert("errors".into(), json!(self.errors()));
        view.dispatch(&view.config().layout_template(&orientation), &context)
    }

    fn dispatch_render(&mut self, view: &View<'_>) -> Result<String> {
        match self.decorator.clone() {
            Some(decorator) => {
                debug!(
                    control = %self.name,
                    decorator = decorator.name(),
                    "rendering through decorator"
                );
                decorator.decorate(self, view)
            }
            None => self.render_default(view),
        }
    }

    fn import_errors(&mut self, view: &View<'_>) {
        let errors = view.messages_for_field(&self.name);
        trace!(control = %self.name, count = errors.len(), "importing validation errors");
        for error in errors {
            self.add_error(error);
        }
    }

    fn materialize_label(&mut self, config: &FormConfig) {
        let hidden = self.control_type.as_deref() == Some(config.hidden_type.as_str());
        if self.label.is_some() || hidden {
            return;
        }
        let text = capitalize_first(&self.name);
        debug!(control = %self.name, label = %text, "attaching default label");
        self.set_label(text, "");
    }
}

impl Attributable for Control {
    fn attribute_bag(&self) -> &AttributeBag {
        &self.attributes
    }

    fn attribute_bag_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("handle", &self.handle)
            .field("name", &self.name)
            .field("type", &self.control_type)
            .field("value", &self.value)
            .field("attributes", &self.attributes)
            .field("label", &self.label)
            .field("decorator", &self.decorator.as_ref().map(|d| d.name()))
            .field("messages", &self.messages)
            .field("orientation", &self.orientation)
            .field("wrapper", &self.wrapper)
            .finish_non_exhaustive()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "control render panicked".to_string()
    }
}
