//! # Configuration
//!
//! Template naming conventions are managed by [`confique`], layering a TOML
//! file and environment variables over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `FORMWORK_CONTROL_TEMPLATE_PREFIX`, etc.
//! 2. **Config file**: the TOML file passed to [`FormConfig::load`], if it exists.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `control_template_prefix` | `controls.` | Prepended to a control's type to name its input template |
//! | `layout_template_prefix` | (empty) | Prepended to a control's orientation to name its layout template |
//! | `label_template` | `label` | Template used to render labels |
//! | `hidden_type` | `hidden` | Control type that never gets an automatic label |

use crate::error::Result;
use confique::Config;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Compiled defaults, shared by views that are not given a config.
pub static DEFAULT_CONFIG: Lazy<FormConfig> = Lazy::new(FormConfig::default);

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Prefix for input body templates (`controls.` + `text` = `controls.text`)
    #[config(env = "FORMWORK_CONTROL_TEMPLATE_PREFIX", default = "controls.")]
    pub control_template_prefix: String,

    /// Prefix for layout templates, prepended to the orientation
    #[config(env = "FORMWORK_LAYOUT_TEMPLATE_PREFIX", default = "")]
    pub layout_template_prefix: String,

    /// Template name for labels
    #[config(env = "FORMWORK_LABEL_TEMPLATE", default = "label")]
    pub label_template: String,

    /// Control type rendered without an automatic label
    #[config(env = "FORMWORK_HIDDEN_TYPE", default = "hidden")]
    pub hidden_type: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            control_template_prefix: "controls.".to_string(),
            layout_template_prefix: String::new(),
            label_template: "label".to_string(),
            hidden_type: "hidden".to_string(),
        }
    }
}

impl FormConfig {
    /// Loads the config from the environment and an optional TOML file.
    ///
    /// A file that does not exist is skipped.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Template name for an input body of the given control type.
    pub fn control_template(&self, control_type: &str) -> String {
        format!("{}{}", self.control_template_prefix, control_type)
    }

    /// Template name for the layout of the given orientation.
    pub fn layout_template(&self, orientation: &str) -> String {
        format!("{}{}", self.layout_template_prefix, orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};

    // `load` reads the process environment; tests that call it run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(key: &'static str, value: &str) -> Self {
            env::set_var(key, value);
            Self(key)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            env::remove_var(self.0);
        }
    }

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.control_template_prefix, "controls.");
        assert_eq!(config.layout_template_prefix, "");
        assert_eq!(config.label_template, "label");
        assert_eq!(config.hidden_type, "hidden");
    }

    #[test]
    fn test_template_names() {
        let config = FormConfig::default();
        assert_eq!(config.control_template("text"), "controls.text");
        assert_eq!(config.layout_template("vertical"), "vertical");
    }

    #[test]
    fn test_load_from_file() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formwork.toml");
        fs::write(
            &path,
            "control_template_prefix = \"form.controls.\"\nlayout_template_prefix = \"form.\"\n",
        )
        .unwrap();

        let config = FormConfig::load(Some(&path)).unwrap();

        assert_eq!(config.control_template("date"), "form.controls.date");
        assert_eq!(config.layout_template("horizontal"), "form.horizontal");
        assert_eq!(config.label_template, "label");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let config = FormConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formwork.toml");
        fs::write(&path, "label_template = [").unwrap();
        assert!(FormConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let _guard = env_lock();
        let _label = EnvVar::set("FORMWORK_LABEL_TEMPLATE", "form.caption");

        let config = FormConfig::load(None).unwrap();

        assert_eq!(config.label_template, "form.caption");
        assert_eq!(config.control_template_prefix, "controls.");
    }

    #[test]
    fn test_env_wins_over_file() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formwork.toml");
        fs::write(&path, "hidden_type = \"secret\"\n").unwrap();
        let _hidden = EnvVar::set("FORMWORK_HIDDEN_TYPE", "token");

        let config = FormConfig::load(Some(&path)).unwrap();

        assert_eq!(config.hidden_type, "token");
    }
}
