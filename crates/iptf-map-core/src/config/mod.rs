//! Configuration management for the IPTF Map.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `iptf-map.toml` file
//! 3. User config `~/.config/iptf-map/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content corpus configuration.
    pub content: ContentConfig,

    /// Graph artifact configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./iptf-map.toml` (project local)
    /// 2. `~/.config/iptf-map/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("IPTF_MAP_CONTENT_ROOT") {
            self.content.root = PathBuf::from(root);
        }
        if let Ok(len) = std::env::var("IPTF_MAP_SUMMARY_MAX_LEN") {
            if let Ok(n) = len.parse() {
                self.content.summary_max_len = n;
            }
        }

        if let Ok(path) = std::env::var("IPTF_MAP_OUTPUT_PATH") {
            self.output.path = PathBuf::from(path);
        }
        if let Ok(pretty) = std::env::var("IPTF_MAP_PRETTY") {
            if let Ok(b) = pretty.parse() {
                self.output.pretty = b;
            }
        }
    }

    /// Reject values the graph builder cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.summary_max_len == 0 {
            return Err(ConfigError::Invalid(
                "content.summary_max_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Content corpus configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Root directory holding one subdirectory per category.
    pub root: PathBuf,

    /// File names excluded in every category directory.
    pub skip_files: Vec<String>,

    /// Maximum summary length in characters.
    pub summary_max_len: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            skip_files: DEFAULT_SKIP_FILES.iter().map(|s| s.to_string()).collect(),
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
        }
    }
}

impl ContentConfig {
    /// Whether a file name is a document the builder should read.
    pub fn is_document(&self, file_name: &str) -> bool {
        file_name.ends_with(DOCUMENT_EXTENSION)
            && !self.skip_files.iter().any(|s| s == file_name)
    }
}

/// Graph artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the graph JSON is written.
    pub path: PathBuf,

    /// Pretty-print the JSON (two-space indent).
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: DEFAULT_PRETTY_OUTPUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.content.root, PathBuf::from(DEFAULT_CONTENT_ROOT));
        assert_eq!(config.content.summary_max_len, DEFAULT_SUMMARY_MAX_LEN);
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_document() {
        let config = ContentConfig::default();
        assert!(config.is_document("pattern-shielding.md"));
        assert!(!config.is_document("README.md"));
        assert!(!config.is_document("_template.md"));
        assert!(!config.is_document("diagram.png"));
        assert!(!config.is_document("pattern-shielding.markdown"));
    }

    #[test]
    fn test_zero_summary_len_is_invalid() {
        let mut config = Config::default();
        config.content.summary_max_len = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
