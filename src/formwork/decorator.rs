//! # Decorators
//!
//! A [`Decorator`] takes over rendering of the control it is attached to.
//! Decorators are stateless strategies: they adjust the control (wrapper,
//! attributes) and then hand back to
//! [`Control::render_default`](crate::control::Control::render_default), which
//! runs the regular pipeline. They never reimplement that pipeline.
//!
//! ```rust
//! use formwork::attributes::Attributable;
//! use formwork::control::Control;
//! use formwork::decorator::Decorator;
//! use formwork::error::Result;
//! use formwork::view::View;
//!
//! struct ReadonlyDecorator;
//!
//! impl Decorator for ReadonlyDecorator {
//!     fn name(&self) -> &'static str {
//!         "readonly"
//!     }
//!
//!     fn decorate(&self, control: &mut Control, view: &View<'_>) -> Result<String> {
//!         control.set_attribute("readonly", true);
//!         control.render_default(view)
//!     }
//! }
//! ```

use crate::control::Control;
use crate::error::Result;
use crate::view::View;

/// Wrapper class applied by [`HiddenDecorator`].
pub const HIDDEN_WRAPPER_CLASS: &str = "hide";

pub trait Decorator: Send + Sync {
    /// Short identifier, used in logs and debug output.
    fn name(&self) -> &'static str;

    fn decorate(&self, control: &mut Control, view: &View<'_>) -> Result<String>;
}

/// Renders the control normally inside a hidden wrapper.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenDecorator;

impl Decorator for HiddenDecorator {
    fn name(&self) -> &'static str {
        "hidden"
    }

    fn decorate(&self, control: &mut Control, view: &View<'_>) -> Result<String> {
        control.wrapper_mut().set("class", HIDDEN_WRAPPER_CLASS);
        control.render_default(view)
    }
}
