// src/crypto/encrypt.rs
use tracing::debug;

use super::primitive::Mode;
use super::{armor, fit_key};
use crate::enums::EncryptionAlgorithm;
use crate::error::CipherError;

/// Encrypt plaintext under `key` → base64 ciphertext text
pub fn encrypt_to_string(
    algorithm: EncryptionAlgorithm,
    plaintext: &[u8],
    key: &str,
) -> Result<String, CipherError> {
    if plaintext.is_empty() {
        return Err(CipherError::FailedToEncodeParams);
    }
    let key = fit_key(key, algorithm.key_length());

    let raw = algorithm
        .primitive()
        .apply(Mode::Encrypt, key.expose_secret(), plaintext)
        .map_err(|status| {
            debug!(%algorithm, ?status, "primitive rejected encryption");
            CipherError::EncryptionFailed
        })?;

    Ok(armor::encode(&raw))
}
