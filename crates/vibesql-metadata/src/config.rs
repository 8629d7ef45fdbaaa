//! Metadata view configuration
//!
//! Read from the `[metadata]` section of a TOML document:
//!
//! ```toml
//! [metadata]
//! search_escape = "\\"
//! page_size = 4096
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Settings consumed by the metadata engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Escape character for every LIKE pattern argument
    #[serde(default = "default_search_escape")]
    pub search_escape: char,

    /// Bytes per storage page; divisor for the PAGES column of index info
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    metadata: MetadataConfig,
}

fn default_search_escape() -> char {
    '\\'
}

fn default_page_size() -> u64 {
    4096
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig { search_escape: default_search_escape(), page_size: default_page_size() }
    }
}

impl MetadataConfig {
    /// Parse the `[metadata]` section of a TOML document.
    /// A document without the section yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument = toml::from_str(content)?;
        document.metadata.validate()
    }

    /// Load from a TOML file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be greater than zero".to_string()));
        }
        Ok(self)
    }
}
