//! # Template Dispatch
//!
//! Rendering a control never touches a template engine directly. It asks a
//! [`TemplateResolver`] to turn a template *name* plus a [`Context`] into text.
//! Names follow a dotted convention: input bodies live under `controls.<type>`
//! and layouts are named after the orientation (`vertical`, `horizontal`, ...).
//!
//! [`TemplateRegistry`] is the bundled resolver, backed by
//! [minijinja](https://docs.rs/minijinja). Templates can be registered inline
//! or loaded lazily from a directory where `controls.text` maps to
//! `controls/text.html`.
//!
//! ```rust
//! use formwork::template::{Context, TemplateRegistry, TemplateResolver};
//! use serde_json::json;
//!
//! let mut registry = TemplateRegistry::new();
//! registry.add_template("vertical", "<div>{{ label }}{{ input }}</div>").unwrap();
//!
//! let mut context = Context::new();
//! context.insert("label".into(), json!("Email"));
//! context.insert("input".into(), json!("<input name=\"email\">"));
//!
//! let html = registry.render("vertical", &context).unwrap();
//! assert_eq!(html, "<div>Email<input name=\"email\"></div>");
//! ```
//!
//! Output is not auto-escaped: the rendered input body is spliced into the
//! layout verbatim. Templates escape user-controlled values with `| e`.

use crate::error::Result;
use minijinja::{AutoEscape, Environment, ErrorKind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Template context: a JSON object keyed by variable name.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// File extension used when loading templates from disk.
pub const TEMPLATE_EXTENSION: &str = "html";

/// Renders a named template against a context.
///
/// A missing template is an error of the resolver; callers decide how to
/// degrade.
pub trait TemplateResolver {
    fn render(&self, name: &str, context: &Context) -> Result<String>;
}

impl<F> TemplateResolver for F
where
    F: Fn(&str, &Context) -> Result<String>,
{
    fn render(&self, name: &str, context: &Context) -> Result<String> {
        self(name, context)
    }
}

/// A minijinja environment with pre-registered or directory-loaded templates.
pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Creates a registry that loads unknown templates from `root` on first use.
    ///
    /// Inline templates registered with [`add_template`](Self::add_template)
    /// take precedence over files.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut registry = Self::new();
        registry
            .env
            .set_loader(move |name| load_from_dir(&root, name));
        registry
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Chaining form of [`add_template`](Self::add_template).
    pub fn with_template(mut self, name: &str, source: &str) -> Result<Self> {
        self.add_template(name, source)?;
        Ok(self)
    }
}

impl TemplateResolver for TemplateRegistry {
    fn render(&self, name: &str, context: &Context) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}

/// Maps a dotted template name to its file below `root`.
fn template_path(root: &Path, name: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in name.split('.') {
        path.push(segment);
    }
    path.set_extension(TEMPLATE_EXTENSION);
    path
}

fn load_from_dir(
    root: &Path,
    name: &str,
) -> std::result::Result<Option<String>, minijinja::Error> {
    // Names are dotted identifiers; anything that could escape `root` is unknown.
    if name
        .split('.')
        .any(|segment| segment.is_empty() || segment.contains(&['/', '\\'][..]))
    {
        return Ok(None);
    }

    let path = template_path(root, name);
    match fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("could not read template file {}", path.display()),
        )
        .with_source(err)),
    }
}
