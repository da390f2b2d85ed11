// src/config/defaults.rs
use crate::config::app::{Cipher, Storage};
use crate::enums::EncryptionAlgorithm;

pub const DEFAULT_ALGORITHM: EncryptionAlgorithm = EncryptionAlgorithm::Aes;

/// No explicit root: the engine falls back to the platform documents dir
pub fn default_storage() -> Storage {
    Storage { root: None }
}

pub fn default_cipher() -> Cipher {
    Cipher {
        algorithm: DEFAULT_ALGORITHM,
    }
}
