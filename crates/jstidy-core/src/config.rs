//! Configuration handling for jstidy.
//!
//! Configuration lives in an optional `jstidy.toml`. Every field has a
//! default, so an empty or missing file is equivalent to:
//!
//! ```toml
//! [lint]
//! console_identifier = "console"
//!
//! [output]
//! fixed_suffix = ".linted.js"
//! indent = "  "
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TidyError;

/// File name searched for by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = "jstidy.toml";

/// jstidy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Rule settings
    #[serde(default)]
    pub lint: LintConfig,

    /// Fix-mode output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rule settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    /// Identifier whose top-level member calls are removed (`console.log(...)`).
    #[serde(default = "default_console_identifier")]
    pub console_identifier: String,
}

/// Fix-mode output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suffix appended to the input path for the fixed file.
    #[serde(default = "default_fixed_suffix")]
    pub fixed_suffix: String,

    /// One level of indentation in generated code.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_console_identifier() -> String {
    "console".to_string()
}

fn default_fixed_suffix() -> String {
    ".linted.js".to_string()
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            console_identifier: default_console_identifier(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fixed_suffix: default_fixed_suffix(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, origin: &str) -> Result<Self, TidyError> {
        let config: Config =
            toml::from_str(text).map_err(|e| TidyError::config(origin, e.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TidyError> {
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| TidyError::io(origin.clone(), e))?;
        Self::from_toml(&text, &origin)
    }

    /// Load `jstidy.toml` from `dir` if present, otherwise return defaults.
    pub fn discover(dir: &Path) -> Result<Self, TidyError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self, origin: &str) -> Result<(), TidyError> {
        let ident = &self.lint.console_identifier;
        let valid = ident
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && ident
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if !valid {
            return Err(TidyError::config(
                origin,
                format!("console_identifier '{ident}' is not a valid identifier"),
            ));
        }
        if self.output.fixed_suffix.is_empty() {
            return Err(TidyError::config(origin, "fixed_suffix must not be empty"));
        }
        Ok(())
    }
}
