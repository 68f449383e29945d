use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::diff::DiffAlgorithm;
use crate::error::{Error, Result};

pub const FORMAT_VERSION: u32 = 1;

/// Contents of `config.toml` in the repository directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    pub format_version: u32,
    #[serde(default)]
    pub diff: DiffConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    #[serde(default)]
    pub algorithm: DiffAlgorithm,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            diff: DiffConfig::default(),
        }
    }
}

impl RepoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config: RepoConfig = toml::from_str(&data)?;

        if config.format_version != FORMAT_VERSION {
            return Err(Error::UnsupportedFormat(config.format_version));
        }

        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}
