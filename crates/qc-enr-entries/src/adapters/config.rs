//! # Config Adapters
//!
//! - `StaticConfigProvider` - Hardcoded config (always available)
//! - `TomlConfigProvider` - Config file loading (requires "config" feature)

use crate::domain::EntryConfig;
use crate::ports::ConfigProvider;

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: EntryConfig,
}

impl StaticConfigProvider {
    /// Create with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with specified entry config.
    #[must_use]
    pub fn with_config(mut self, config: EntryConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_entry_config(&self) -> EntryConfig {
        self.config.clone()
    }
}

#[cfg(feature = "config")]
mod toml_config {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use thiserror::Error;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        entries: EntryConfigFile,
    }

    #[derive(Debug, Deserialize, Default)]
    struct EntryConfigFile {
        max_value_size: Option<usize>,
        allow_unknown_keys: Option<bool>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [entries]
    /// max_value_size = 300
    /// allow_unknown_keys = true
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: EntryConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if file cannot be read, parsed or holds invalid limits.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let defaults = EntryConfig::default();
            let ec = file.entries;
            let config = EntryConfig {
                max_value_size: ec.max_value_size.unwrap_or(defaults.max_value_size),
                allow_unknown_keys: ec.allow_unknown_keys.unwrap_or(defaults.allow_unknown_keys),
            };
            if config.max_value_size == 0 {
                return Err(ConfigError::Invalid("max_value_size must be positive".into()));
            }

            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_entry_config(&self) -> EntryConfig {
            self.config.clone()
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, Error, PartialEq, Eq)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {error}")]
        Io { path: String, error: String },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
        /// Parsed values out of range.
        #[error("Invalid config: {0}")]
        Invalid(String),
    }

}

#[cfg(feature = "config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
