//! The per-request render environment.
//!
//! A [`View`] bundles everything a render call needs from outside the control:
//! the template resolver, the validation message store and the naming
//! config. It is cheap to build and holds borrows only, so one is typically
//! created per request and shared by every control of a form.

use crate::config::{FormConfig, DEFAULT_CONFIG};
use crate::error::Result;
use crate::messages::{MessageStore, NoMessages};
use crate::template::{Context, TemplateResolver};
use tracing::debug;

#[derive(Clone, Copy)]
pub struct View<'a> {
    resolver: &'a dyn TemplateResolver,
    messages: &'a dyn MessageStore,
    config: &'a FormConfig,
}

impl<'a> View<'a> {
    /// A view with no validation messages and the default config.
    pub fn new(resolver: &'a dyn TemplateResolver) -> Self {
        Self {
            resolver,
            messages: &NoMessages,
            config: &DEFAULT_CONFIG,
        }
    }

    pub fn with_messages(mut self, messages: &'a dyn MessageStore) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_config(mut self, config: &'a FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FormConfig {
        self.config
    }

    pub fn messages_for_field(&self, field: &str) -> Vec<String> {
        self.messages.messages_for_field(field)
    }

    /// Renders a named template through the resolver.
    pub fn dispatch(&self, template: &str, context: &Context) -> Result<String> {
        debug!(template, "dispatching template");
        self.resolver.render(template, context)
    }
}
