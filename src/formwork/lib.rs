//! # Formwork Architecture
//!
//! Formwork builds HTML form fields out of small, composable parts and renders
//! them through named templates. It does not parse requests or validate input;
//! it takes the validation messages some other layer produced and shows them
//! next to the right field.
//!
//! ## The Render Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Control::render(view)                                       │
//! │  - Never fails: errors and panics become inline text         │
//! │  - Hands over to the Decorator when one is attached          │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Control::render_default(view)                               │
//! │  1. import errors from the MessageStore                      │
//! │  2. attach a default Label (unless hidden)                   │
//! │  3. render `controls.<type>`       → input                   │
//! │  4. render `<orientation>` layout  → result                  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  View: TemplateResolver + MessageStore + FormConfig          │
//! │  - TemplateRegistry (minijinja) or any resolver you write    │
//! │  - ErrorBags / MessageBag / NoMessages                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Changes During Rendering
//!
//! Rendering takes `&mut Control` because it is not a pure read:
//! - validation errors are appended on every render (two renders, two copies);
//! - the default label is attached on the first render and kept afterwards.
//!
//! ## Module Overview
//!
//! - [`control`]: The `Control` type and the render pipeline
//! - [`attributes`]: Ordered attribute bag and the `Attributable` trait
//! - [`label`]: Captions bound to a control by handle
//! - [`wrapper`]: Layout configuration around a control
//! - [`decorator`]: Render strategies (`HiddenDecorator`)
//! - [`messages`]: Validation message stores
//! - [`template`]: Template dispatch and the minijinja-backed registry
//! - [`view`]: Per-request render environment
//! - [`config`]: Template naming conventions
//! - [`error`]: Error types

pub mod attributes;
pub mod config;
pub mod control;
pub mod decorator;
pub mod error;
pub mod label;
pub mod messages;
pub mod template;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod view;
pub mod wrapper;

pub use attributes::{Attributable, AttrValue, AttributeBag};
pub use control::{Control, ControlId, ControlValue, Rendered};
pub use decorator::{Decorator, HiddenDecorator};
pub use error::{FormError, Result};
pub use label::Label;
pub use messages::{ErrorBags, MessageBag, MessageStore, NoMessages};
pub use template::{Context, TemplateRegistry, TemplateResolver};
pub use view::View;
pub use wrapper::Wrapper;
