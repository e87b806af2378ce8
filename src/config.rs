use crate::contact::DEFAULT_ENDPOINT;
use crate::shell::CalculatorId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File the CLI picks up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "omnicalc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactConfig {
    // Mail relay receiving the contact form
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ShellConfig {
    // Tab the interactive shell opens on
    #[serde(default)]
    pub default_calculator: CalculatorId,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
