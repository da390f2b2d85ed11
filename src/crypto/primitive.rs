// src/crypto/primitive.rs
//! Raw cipher execution over RustCrypto backends
//!
//! Block ciphers run in CBC mode with an all-zero IV and PKCS7 padding. RC4
//! is a keystream XOR and ignores padding. Nothing here knows about base64
//! or passphrases: callers hand in key bytes of exactly the right length.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use rc4::consts::U1;
use rc4::{Rc4, StreamCipher};

/// Cipher identifier handed to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Aes128Cbc,
    BlowfishCbc,
    DesCbc,
    TdesEde3Cbc,
    Cast5Cbc,
    Rc4,
}

/// Backend status codes, mapped onto `CipherError` by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Key bytes rejected by the cipher's key schedule
    InvalidKey,
    /// Ciphertext length or PKCS7 padding did not check out
    BadPadding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Primitive {
    pub fn apply(self, mode: Mode, key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        match (self, mode) {
            (Self::Aes128Cbc, Mode::Encrypt) => cbc_encrypt::<aes::Aes128>(key, data),
            (Self::Aes128Cbc, Mode::Decrypt) => cbc_decrypt::<aes::Aes128>(key, data),
            (Self::BlowfishCbc, Mode::Encrypt) => cbc_encrypt::<blowfish::Blowfish>(key, data),
            (Self::BlowfishCbc, Mode::Decrypt) => cbc_decrypt::<blowfish::Blowfish>(key, data),
            (Self::DesCbc, Mode::Encrypt) => cbc_encrypt::<des::Des>(key, data),
            (Self::DesCbc, Mode::Decrypt) => cbc_decrypt::<des::Des>(key, data),
            (Self::TdesEde3Cbc, Mode::Encrypt) => cbc_encrypt::<des::TdesEde3>(key, data),
            (Self::TdesEde3Cbc, Mode::Decrypt) => cbc_decrypt::<des::TdesEde3>(key, data),
            (Self::Cast5Cbc, Mode::Encrypt) => cbc_encrypt::<cast5::Cast5>(key, data),
            (Self::Cast5Cbc, Mode::Decrypt) => cbc_decrypt::<cast5::Cast5>(key, data),
            // Symmetric keystream: one routine for both directions
            (Self::Rc4, _) => rc4_apply(key, data),
        }
    }
}

fn cbc_encrypt<C>(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, PrimitiveError>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let iv = vec![0u8; C::block_size()];
    let encryptor =
        cbc::Encryptor::<C>::new_from_slices(key, &iv).map_err(|_| PrimitiveError::InvalidKey)?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, PrimitiveError>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let iv = vec![0u8; C::block_size()];
    let decryptor =
        cbc::Decryptor::<C>::new_from_slices(key, &iv).map_err(|_| PrimitiveError::InvalidKey)?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PrimitiveError::BadPadding)
}

fn rc4_apply(key: &[u8], data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let mut rc4 = Rc4::<U1>::new_from_slice(key).map_err(|_| PrimitiveError::InvalidKey)?;
    let mut out = data.to_vec();
    rc4.apply_keystream(&mut out);
    Ok(out)
}
