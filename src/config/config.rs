//! User config file handling
//!
//! `config.toml` lives in `$APILAB_CONFIG_DIR`, or `apilab/` under the platform
//! config directory:
//!
//! ```toml
//! [defaults]
//! options = ["--no-color", "-v"]
//! ```

use std::path::{Path, PathBuf};

use crate::errors::ApilabError;

/// Overrides the config directory
pub const CONFIG_DIR_ENV: &str = "APILAB_CONFIG_DIR";

/// apilab configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Arguments inserted before the command-line arguments
    pub default_options: Vec<String>,
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, ApilabError> {
        Self::load_from(&Self::default_config_dir())
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, ApilabError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ApilabError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse the body of `config.toml`
    pub fn parse(content: &str) -> Result<Self, ApilabError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ApilabError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { default_options })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("apilab"))
            .unwrap_or_else(|| PathBuf::from(".apilab"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_default_options() {
        let config = Config::parse("[defaults]\noptions = [\"--no-color\", \"-v\"]\n").unwrap();
        assert_eq!(config.default_options, vec!["--no-color", "-v"]);
    }

    #[test]
    fn test_parse_without_defaults() {
        let config = Config::parse("# nothing here\n").unwrap();
        assert!(config.default_options.is_empty());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = Config::parse("[defaults\noptions = ").unwrap_err();
        assert!(matches!(err, ApilabError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert!(config.default_options.is_empty());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[defaults]\noptions = [\"--offline\"]\n").unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.default_options, vec!["--offline"]);
    }
}
