// src/error.rs
//! Public error types for the entire crate
//!
//! Two closed taxonomies: [`CipherError`] for the cipher layer and
//! [`StorageError`] for the storage engine. Decrypt failures raised while
//! loading reach the caller unchanged through [`StorageError::Cipher`].

use std::path::PathBuf;

use thiserror::Error;

/// Failures of [`crate::crypto::CryptoProvider`] operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("failed to encode encryption parameters")]
    FailedToEncodeParams,

    #[error("encryption failed")]
    EncryptionFailed,

    #[error("failed to decode decryption parameters")]
    FailedToDecodeParams,

    #[error("decryption failed")]
    DecryptionFailed,
}

/// Failures of [`crate::storage::EncryptedStorage`] operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    #[error("stored artifact could not be unarchived")]
    UnarchiveFailed,

    #[error("no stored artifact with that name")]
    FileNotFound,

    #[error("failed to save artifact")]
    FailedToSave,

    #[error("failed to load artifact")]
    FailedToLoad,

    #[error("failed to delete artifact")]
    FailedToDelete,

    #[error("failed to encode data for saving")]
    FailedToEncodeSaveData,

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Failures while reading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown encryption algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("no storage root configured and no platform documents directory available")]
    NoStorageRoot,
}
