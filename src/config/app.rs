// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults::*;
use crate::consts::{DEFAULT_CONFIG_PATH, ENV_ALGORITHM, ENV_CONFIG_PATH, ENV_STORAGE_ROOT};
use crate::enums::EncryptionAlgorithm;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: Storage,
    pub cipher: Cipher,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cipher {
    pub algorithm: EncryptionAlgorithm,
}

impl Default for Storage {
    fn default() -> Self {
        default_storage()
    }
}

impl Default for Cipher {
    fn default() -> Self {
        default_cipher()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `ESTORE_ROOT` / `ESTORE_ALGORITHM` style overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup(ENV_STORAGE_ROOT).filter(|r| !r.is_empty()) {
            self.storage.root = Some(PathBuf::from(root));
        }
        if let Some(algorithm) = lookup(ENV_ALGORITHM) {
            self.cipher.algorithm = algorithm.parse()?;
        }
        Ok(())
    }
}

/// Read and parse one config file, no env overrides applied
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml_str(&content)
}

/// Resolve the config file named by `lookup(ESTORE_CONFIG)` (or the default
/// path) and apply env overrides from the same `lookup`.
///
/// Only a missing file falls back to built-in defaults. An unreadable or
/// invalid file and a bad override are returned as errors.
pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = lookup(ENV_CONFIG_PATH).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        load_from(&config_path)?
    } else {
        debug!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };

    conf.apply_overrides(lookup)?;
    Ok(conf)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, loaded once from the file and environment.
/// A failed load is not cached, so a later call retries.
pub fn load() -> Result<&'static Config, ConfigError> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }
    let conf = load_with(|key| std::env::var(key).ok())?;
    Ok(CONFIG.get_or_init(|| conf))
}
