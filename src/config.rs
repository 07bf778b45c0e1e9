//! Configuration loading for hashids
//!
//! Settings are layered: JSON file, then `HASHIDS_*` environment variables,
//! then whatever the caller overrides (the CLI flags).

use hashids_core::{HashId, HashIdData, HashIdError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the salt
pub const ENV_SALT: &str = "HASHIDS_SALT";

/// Environment variable overriding the alphabet
pub const ENV_ALPHABET: &str = "HASHIDS_ALPHABET";

/// Environment variable overriding the minimum hash length
pub const ENV_MIN_LENGTH: &str = "HASHIDS_MIN_LENGTH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Codec(#[from] HashIdError),
}

/// Encoder settings as stored on disk
///
/// ```json
/// { "alphabet": "...", "salt": "...", "min_length": 8 }
/// ```
///
/// Missing fields take the defaults of [`HashIdData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub data: HashIdData,
}

impl Config {
    /// Load settings from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Overlay `HASHIDS_*` variables from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Overlay variables from `lookup`; unset variables leave values alone
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(salt) = lookup(ENV_SALT) {
            self.data.salt = salt;
        }
        if let Some(alphabet) = lookup(ENV_ALPHABET) {
            self.data.alphabet = alphabet;
        }
        if let Some(value) = lookup(ENV_MIN_LENGTH) {
            self.data.min_length = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_MIN_LENGTH,
                value: value.clone(),
            })?;
        }
        Ok(())
    }

    /// Build the encoder these settings describe
    pub fn build(&self) -> Result<HashId, ConfigError> {
        Ok(HashId::new(&self.data)?)
    }
}

impl From<HashIdData> for Config {
    fn from(data: HashIdData) -> Self {
        Self { data }
    }
}

/// Get the default config file path
#[cfg(feature = "cli")]
pub fn default_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".hashids").join("config.json")
}

/// Ensure the parent directory of `path` exists
pub fn ensure_config_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(path.to_path_buf())
}
