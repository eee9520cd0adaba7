use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

const CONFIG_FILE: &str = ".temper.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Output layout of the serializer. Defaults give four-space indentation
/// and no blank lines between blocks.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    #[serde(rename = "separate-blocks")]
    pub separate_blocks: bool,
}

fn default_indent() -> usize {
    4
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            separate_blocks: false,
        }
    }
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Reads `.temper.toml` from the working directory, or defaults when absent.
pub fn load_config() -> Result<RenderConfig, ConfigError> {
    match RenderConfig::from_file(CONFIG_FILE) {
        Err(ConfigError::NotFound(_)) => Ok(RenderConfig::default()),
        other => other,
    }
}
