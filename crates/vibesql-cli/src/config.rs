use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use vibesql_metadata::MetadataConfig;

use crate::formatter::OutputFormat;

/// vibesql-meta configuration loaded from ~/.vibesql-meta.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default output format: table, json, csv
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is unset: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

// Default value functions
fn default_format() -> String {
    "table".to_string()
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { format: default_format() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig { level: default_level() }
    }
}

impl CliConfig {
    /// Load `path`, or ~/.vibesql-meta.toml when no path is given.
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::config_path()?;
                if !default_path.exists() {
                    return Ok(CliConfig::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", config_path.display(), e)
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;
        let metadata = config.metadata.validate()?;
        Ok(CliConfig { metadata, ..config })
    }

    /// Get the configuration file path (~/.vibesql-meta.toml)
    pub fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".vibesql-meta.toml"))
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        OutputFormat::parse(&self.display.format)
    }
}
