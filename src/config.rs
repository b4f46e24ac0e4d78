//! Configuration System
//!
//! Page bindings and user-facing text for the expenses feed, loaded from
//! TOML. Every field has a default, so an empty document is a valid config.

use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::pager::DEFAULT_THRESHOLD_PX;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FeedConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub elements: ElementsConfig,
}

/// Infinite-scroll tuning
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Load more once the page bottom is closer than this many pixels
    #[serde(default = "default_threshold")]
    pub threshold_px: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD_PX
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold(),
        }
    }
}

/// Status line text
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessagesConfig {
    #[serde(default = "default_empty_message")]
    pub empty: String,

    #[serde(default = "default_load_error_message")]
    pub load_error: String,
}

fn default_empty_message() -> String {
    "No transactions have been added yet!".to_string()
}

fn default_load_error_message() -> String {
    "Error loading more expenses".to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            empty: default_empty_message(),
            load_error: default_load_error_message(),
        }
    }
}

/// Element ids and classes the page binds to
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ElementsConfig {
    /// Id of the control that reveals the add-purchase form
    #[serde(default = "default_toggle")]
    pub toggle: String,

    /// Id of the hidden add-purchase form
    #[serde(default = "default_form")]
    pub form: String,

    /// Name of the form field focused when the form opens
    #[serde(default = "default_name_field")]
    pub name_field: String,

    /// Id of the status line
    #[serde(default = "default_status")]
    pub status: String,

    /// Class of the list root
    #[serde(default = "default_container_class")]
    pub container_class: String,
}

fn default_toggle() -> String {
    "plus".to_string()
}

fn default_form() -> String {
    "new-purchase".to_string()
}

fn default_name_field() -> String {
    "name".to_string()
}

fn default_status() -> String {
    "loading".to_string()
}

fn default_container_class() -> String {
    "container".to_string()
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            toggle: default_toggle(),
            form: default_form(),
            name_field: default_name_field(),
            status: default_status(),
            container_class: default_container_class(),
        }
    }
}

impl FeedConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse(error) => ConfigError::ParseFile {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to parse config file {path:?}: {error}")]
    ParseFile { path: PathBuf, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Expenses feed configuration

[scroll]
# Load the next page when the bottom of the page is closer than this (px)
threshold_px = 200.0

[messages]
# Shown when the first page has no expenses
empty = "No transactions have been added yet!"

# Shown when loading a further page fails
load_error = "Error loading more expenses"

[elements]
# Button revealing the add-purchase form
toggle = "plus"

# Add-purchase form and the field focused when it opens
form = "new-purchase"
name_field = "name"

# Status line
status = "loading"

# Class of the list root
container_class = "container"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_default() {
        let config = FeedConfig::from_toml_str("").unwrap();
        assert_eq!(config, FeedConfig::default());
        assert_eq!(config.scroll.threshold_px, 200.0);
        assert_eq!(config.messages.empty, "No transactions have been added yet!");
        assert_eq!(config.elements.container_class, "container");
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = FeedConfig::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = FeedConfig::from_toml_str(
            r#"
            [scroll]
            threshold_px = 350.0

            [messages]
            load_error = "Could not load more"
            "#,
        )
        .unwrap();

        assert_eq!(config.scroll.threshold_px, 350.0);
        assert_eq!(config.messages.load_error, "Could not load more");
        assert_eq!(config.messages.empty, default_empty_message());
        assert_eq!(config.elements, ElementsConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = FeedConfig::from_toml_str("[scroll\nthreshold_px = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[elements]\nstatus = \"status-line\"").unwrap();

        let config = FeedConfig::load(&path).unwrap();
        assert_eq!(config.elements.status, "status-line");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FeedConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_bad_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "threshold_px = [").unwrap();

        let err = FeedConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
