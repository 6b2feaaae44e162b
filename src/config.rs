//! Tool configuration.
//!
//! Handles loading and validating `config.toml`. Everything has a sensible
//! default, so the file is optional and sparse — override just the values
//! you want:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [provider]
//! model = "gemini-2.5-flash-image"
//! base_url = "https://generativelanguage.googleapis.com"
//!
//! [export]
//! dir = "."               # Where `export` and `gallery` write files
//! ```
//!
//! The API key is deliberately NOT a config value: it comes from the
//! `GEMINI_API_KEY` environment variable so it never lands in a dotfile
//! that gets committed or synced.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Generation provider settings (model, endpoint).
    pub provider: ProviderConfig,
    /// Export destination settings.
    pub export: ExportConfig,
}

/// Provider endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Model identifier passed to the generateContent endpoint.
    pub model: String,
    /// API base URL. Overridable for self-hosted proxies and tests.
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash-image".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// Where exported images and the generated gallery land.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, or defaults if `path` is absent
    /// on disk. Parse and validation errors are hard failures — a config the
    /// user wrote should never be silently ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "provider.model must not be empty".to_string(),
            ));
        }
        if !self.provider.base_url.starts_with("http") {
            return Err(ConfigError::Validation(format!(
                "provider.base_url must be an http(s) URL, got '{}'",
                self.provider.base_url
            )));
        }
        Ok(())
    }
}

/// A documented stock `config.toml` with all options at their defaults.
///
/// Printed by the `gen-config` subcommand so users start from a commented
/// file instead of an empty one.
pub fn stock_config_toml() -> String {
    let defaults = Config::default();
    format!(
        r#"# Lumina configuration. All options are optional - defaults shown.
# The API key is read from the GEMINI_API_KEY environment variable,
# never from this file.

[provider]
# Model identifier for image generation
model = "{model}"
# API base URL (change for proxies or self-hosted gateways)
base_url = "{base_url}"

[export]
# Where `export` and `gallery` write files
dir = "{dir}"
"#,
        model = defaults.provider.model,
        base_url = defaults.provider.base_url,
        dir = defaults.export.dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(tmp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.provider.model, "gemini-2.5-flash-image");
        assert_eq!(config.export.dir, ".");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[provider]\nmodel = \"gemini-next\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.provider.model, "gemini-next");
        assert!(config.provider.base_url.contains("googleapis"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[provider]\nmodle = \"typo\"\n");
        assert!(matches!(Config::load(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_base_url_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[provider]\nbase_url = \"ftp://nope\"\n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_model_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[provider]\nmodel = \"  \"\n");
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_back() {
        let config: Config = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config.provider.model, Config::default().provider.model);
    }
}
