// src/config.rs

//! Configuration file
//!
//! All settings have defaults, so the file is optional and may be partial.
//!
//! # Example platter.toml
//!
//! ```toml
//! [data]
//! # Local path, file:// URL, or http(s):// URL of the recipe dataset
//! source = "data/recipes.json"
//!
//! [display]
//! singular = "recette"
//! plural = "recettes"
//! description_lines = 4
//! image_base = "assets/img"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::store::DataSource;

/// Default path for the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "platter.toml";

/// Errors that can occur when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

impl From<ConfigError> for crate::Error {
    fn from(e: ConfigError) -> Self {
        crate::Error::ConfigError(e.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset location
    #[serde(default)]
    pub data: DataConfig,

    /// Rendering settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// `[data]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Local path, `file://` URL or `http(s)://` URL
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

fn default_source() -> String {
    "data/recipes.json".to_string()
}

/// `[display]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Noun used for zero or one result
    #[serde(default = "default_singular")]
    pub singular: String,

    /// Noun used for two or more results
    #[serde(default = "default_plural")]
    pub plural: String,

    /// Description lines shown on a card before it is cut short
    #[serde(default = "default_description_lines")]
    pub description_lines: usize,

    /// Prefix for recipe image filenames in HTML output
    #[serde(default = "default_image_base")]
    pub image_base: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            singular: default_singular(),
            plural: default_plural(),
            description_lines: default_description_lines(),
            image_base: default_image_base(),
        }
    }
}

fn default_singular() -> String {
    "recipe".to_string()
}

fn default_plural() -> String {
    "recipes".to_string()
}

fn default_description_lines() -> usize {
    4
}

fn default_image_base() -> String {
    "assets/img".to_string()
}

impl Config {
    /// Parse the configured data source
    pub fn data_source(&self) -> crate::Result<DataSource> {
        DataSource::parse(&self.data.source)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.display.description_lines == 0 {
            return Err(ConfigError::Invalid(
                "display.description_lines must be at least 1".to_string(),
            ));
        }
        if self.display.singular.trim().is_empty() || self.display.plural.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "display.singular and display.plural cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a configuration from a TOML string
pub fn parse_config_string(content: &str) -> ConfigResult<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a configuration file
pub fn parse_config_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config_string(&content)
}

/// Load the configuration
///
/// An explicitly given path must exist. Without one, the default path is
/// used when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> ConfigResult<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            parse_config_file(path)
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                parse_config_file(default)
            } else {
                debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}
