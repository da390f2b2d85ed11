// src/crypto/mod.rs
//! Passphrase encryption of in-memory buffers, no I/O
//!
//! [`Crypto`] pairs one [`EncryptionAlgorithm`] with the uniform
//! encrypt/decrypt contract of [`CryptoProvider`]:
//!
//! - the passphrase's UTF-8 bytes are the key, truncated or zero-extended to
//!   the algorithm's key length (no key derivation)
//! - block ciphers use CBC with a zero IV and PKCS7 padding, so output is
//!   deterministic for a given plaintext, key and algorithm
//! - ciphertext travels as base64 text
//!
//! There is no integrity protection. A wrong key on a block cipher usually
//! surfaces as [`CipherError::DecryptionFailed`] through a padding mismatch;
//! on RC4 it silently yields different bytes.

mod armor;
mod decrypt;
mod encrypt;
mod primitive;

pub use decrypt::decrypt_from_str;
pub use encrypt::encrypt_to_string;
pub use primitive::{Mode, Primitive, PrimitiveError};

use crate::aliases::KeyMaterial;
use crate::enums::EncryptionAlgorithm;
use crate::error::CipherError;

pub type Result<T> = std::result::Result<T, CipherError>;

/// Uniform encrypt/decrypt contract used by the storage engine
pub trait CryptoProvider {
    /// Encrypt non-empty `plaintext` under `key`, returning base64 text
    fn encrypt(&self, plaintext: &[u8], key: &str) -> Result<String>;

    /// Decrypt base64 `ciphertext` under `key`
    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<Vec<u8>>;
}

/// Stateless cipher service bound to one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Crypto {
    algorithm: EncryptionAlgorithm,
}

impl Crypto {
    pub fn new(algorithm: EncryptionAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }
}

impl CryptoProvider for Crypto {
    fn encrypt(&self, plaintext: &[u8], key: &str) -> Result<String> {
        encrypt_to_string(self.algorithm, plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<Vec<u8>> {
        decrypt_from_str(self.algorithm, ciphertext, key)
    }
}

impl<T: CryptoProvider + ?Sized> CryptoProvider for &T {
    fn encrypt(&self, plaintext: &[u8], key: &str) -> Result<String> {
        (**self).encrypt(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext, key)
    }
}

impl<T: CryptoProvider + ?Sized> CryptoProvider for Box<T> {
    fn encrypt(&self, plaintext: &[u8], key: &str) -> Result<String> {
        (**self).encrypt(plaintext, key)
    }

    fn decrypt(&self, ciphertext: &str, key: &str) -> Result<Vec<u8>> {
        (**self).decrypt(ciphertext, key)
    }
}

/// Passphrase bytes cut or zero-padded to exactly `len`
pub(crate) fn fit_key(passphrase: &str, len: usize) -> KeyMaterial {
    let key: Vec<u8> = passphrase
        .bytes()
        .chain(std::iter::repeat(0))
        .take(len)
        .collect();
    KeyMaterial::new(key)
}
