// src/lib.rs
//! encrypted-storage: passphrase-encrypted named blobs on local disk
//!
//! Features:
//! - Six selectable ciphers (AES, Blowfish, DES, 3DES, CAST, RC4)
//! - Deterministic, base64 ciphertext text
//! - Versioned on-disk container around a JSON envelope
//! - Traversal-safe artifact names under one storage root
//!
//! ```no_run
//! use encrypted_storage::{Crypto, EncryptedStorable, EncryptedStorage, EncryptionAlgorithm, StorageRoot};
//!
//! let storage = EncryptedStorage::new(
//!     Crypto::new(EncryptionAlgorithm::Aes),
//!     StorageRoot::new("/tmp/secrets"),
//! );
//! storage.store("token", b"s3cr3t", "correct horse").unwrap();
//! assert_eq!(storage.load("token", "correct horse").unwrap(), b"s3cr3t");
//! storage.remove("token").unwrap();
//! ```
//!
//! There is no key derivation and no authentication: the passphrase is the
//! key, and encryption uses a fixed zero IV.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod storage;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use config::Config;
pub use crypto::{Crypto, CryptoProvider};
pub use enums::EncryptionAlgorithm;
pub use error::{CipherError, ConfigError, StorageError};
pub use storage::{EncryptedStorable, EncryptedStorage, StorageRoot};
