// src/crypto/decrypt.rs
use tracing::debug;

use super::primitive::Mode;
use super::{armor, fit_key};
use crate::enums::EncryptionAlgorithm;
use crate::error::CipherError;

/// Decrypt base64 ciphertext text under `key` → plaintext bytes
pub fn decrypt_from_str(
    algorithm: EncryptionAlgorithm,
    ciphertext: &str,
    key: &str,
) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() {
        return Err(CipherError::FailedToDecodeParams);
    }
    let raw = armor::decode(ciphertext).map_err(|err| {
        debug!(%algorithm, error = %err, "ciphertext is not valid base64");
        CipherError::FailedToDecodeParams
    })?;
    if raw.is_empty() {
        return Err(CipherError::FailedToDecodeParams);
    }
    let key = fit_key(key, algorithm.key_length());

    algorithm
        .primitive()
        .apply(Mode::Decrypt, key.expose_secret(), &raw)
        .map_err(|status| {
            debug!(%algorithm, ?status, "primitive rejected decryption");
            CipherError::DecryptionFailed
        })
}
