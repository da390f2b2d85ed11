// src/storage/engine.rs
//! store / load / remove of named encrypted artifacts
//!
//! Each call runs Resolve → Encrypt|Decrypt → Serialize|Deserialize → I/O
//! and stops at the first failing stage. Nothing is cached between calls.
//!
//! # Concurrency
//!
//! Calls are synchronous and take no locks. Two writers on the same name race
//! at the filesystem (last write wins) and a reader can observe a partially
//! written artifact. Callers that share a name across threads or processes
//! must serialize access to it themselves.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::container;
use super::envelope::Envelope;
use super::path::StorageRoot;
use crate::config::Config;
use crate::crypto::{Crypto, CryptoProvider};
use crate::error::{ConfigError, StorageError};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Named encrypted blob persistence
pub trait EncryptedStorable {
    /// Encrypt `plaintext` under `password` and write it as `name`,
    /// replacing any previous artifact
    fn store(&self, name: &str, plaintext: &[u8], password: &str) -> Result<()>;

    /// Read and decrypt the artifact stored as `name`
    fn load(&self, name: &str, password: &str) -> Result<Vec<u8>>;

    /// Delete the artifact stored as `name`
    fn remove(&self, name: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct EncryptedStorage<C = Crypto> {
    crypto: C,
    root: StorageRoot,
}

impl<C: CryptoProvider> EncryptedStorage<C> {
    pub fn new(crypto: C, root: StorageRoot) -> Self {
        Self { crypto, root }
    }

    pub fn crypto(&self) -> &C {
        &self.crypto
    }

    pub fn root(&self) -> &StorageRoot {
        &self.root
    }

    /// Absolute path an artifact named `name` lives at
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        self.root.resolve(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_some_and(|path| path.exists())
    }

    fn prepare_data(&self, plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
        let message = self.crypto.encrypt(plaintext, password).map_err(|err| {
            debug!(error = %err, "encryption failed while preparing artifact");
            StorageError::FailedToEncodeSaveData
        })?;
        Envelope::new(message).serialize()
    }
}

impl EncryptedStorage<Crypto> {
    /// Engine for the configured algorithm and storage root, falling back to
    /// the platform documents directory when no root is configured
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        let root = match &config.storage.root {
            Some(base) => StorageRoot::new(base),
            None => StorageRoot::platform_default().ok_or(ConfigError::NoStorageRoot)?,
        };
        Ok(Self::new(Crypto::new(config.cipher.algorithm), root))
    }
}

impl<C: CryptoProvider> EncryptedStorable for EncryptedStorage<C> {
    fn store(&self, name: &str, plaintext: &[u8], password: &str) -> Result<()> {
        let path = self.path_for(name).ok_or(StorageError::FailedToSave)?;
        debug!(name, path = %path.display(), bytes = plaintext.len(), "storing artifact");

        let data = self.prepare_data(plaintext, password)?;
        let artifact = container::archive_bytes(&data);

        write_artifact(&path, &artifact).map_err(|err| {
            debug!(path = %path.display(), error = %err, "artifact write failed");
            StorageError::FailedToSave
        })
    }

    fn load(&self, name: &str, password: &str) -> Result<Vec<u8>> {
        let path = self.path_for(name).ok_or(StorageError::FailedToLoad)?;
        if !path.exists() {
            return Err(StorageError::FileNotFound);
        }
        debug!(name, path = %path.display(), "loading artifact");

        let artifact = fs::read(&path).map_err(|err| {
            debug!(path = %path.display(), error = %err, "artifact read failed");
            StorageError::FailedToLoad
        })?;
        let data = container::unarchive_bytes(&artifact)?;
        let envelope = Envelope::deserialize(&data)?;

        Ok(self.crypto.decrypt(&envelope.message, password)?)
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_for(name).ok_or(StorageError::FailedToLoad)?;
        if !path.exists() {
            return Err(StorageError::FileNotFound);
        }
        debug!(name, path = %path.display(), "removing artifact");

        fs::remove_file(&path).map_err(|err| {
            debug!(path = %path.display(), error = %err, "artifact delete failed");
            StorageError::FailedToDelete
        })
    }
}

/// Create or truncate `path` and write `artifact`. New files are owner-only
/// (0600) on unix; an existing file keeps its mode and is narrowed to 0600.
fn write_artifact(path: &Path, artifact: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(artifact)?;
    file.sync_all()
}
