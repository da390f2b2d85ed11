// src/enums.rs
//! Public enum types used throughout the crate
//!
//! [`EncryptionAlgorithm`] is the closed set of ciphers a caller can pick.
//! Each variant fixes the primitive handed to the crypto backend and the
//! exact number of key bytes taken from the passphrase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::crypto::Primitive;
use crate::error::ConfigError;

/// Supported encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EncryptionAlgorithm {
    #[default]
    #[serde(alias = "aes128")]
    Aes,
    Blowfish,
    Des,
    #[serde(alias = "3des")]
    TripleDes,
    #[serde(alias = "cast5")]
    Cast,
    Rc4,
}

impl EncryptionAlgorithm {
    /// Every selector, in declaration order
    pub const ALL: [EncryptionAlgorithm; 6] = [
        Self::Aes,
        Self::Blowfish,
        Self::Des,
        Self::TripleDes,
        Self::Cast,
        Self::Rc4,
    ];

    pub fn primitive(self) -> Primitive {
        match self {
            Self::Aes => Primitive::Aes128Cbc,
            Self::Blowfish => Primitive::BlowfishCbc,
            Self::Des => Primitive::DesCbc,
            Self::TripleDes => Primitive::TdesEde3Cbc,
            Self::Cast => Primitive::Cast5Cbc,
            Self::Rc4 => Primitive::Rc4,
        }
    }

    /// Key bytes consumed from the passphrase.
    ///
    /// Blowfish and RC4 use their minimum key size, CAST its maximum.
    pub fn key_length(self) -> usize {
        match self {
            Self::Aes => 16,
            Self::Blowfish => 8,
            Self::Des => 8,
            Self::TripleDes => 24,
            Self::Cast => 16,
            Self::Rc4 => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aes => "aes",
            Self::Blowfish => "blowfish",
            Self::Des => "des",
            Self::TripleDes => "tripledes",
            Self::Cast => "cast",
            Self::Rc4 => "rc4",
        }
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes" | "aes128" => Ok(Self::Aes),
            "blowfish" => Ok(Self::Blowfish),
            "des" => Ok(Self::Des),
            "tripledes" | "3des" => Ok(Self::TripleDes),
            "cast" | "cast5" => Ok(Self::Cast),
            "rc4" => Ok(Self::Rc4),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
