// src/storage/envelope.rs
//! JSON record wrapping the base64 ciphertext of one artifact

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub message: String,
}

impl Envelope {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn serialize(&self) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec(self).map_err(|err| {
            debug!(error = %err, "envelope encode failed");
            StorageError::FailedToEncodeSaveData
        })
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, StorageError> {
        serde_json::from_slice(bytes).map_err(|err| {
            debug!(error = %err, "envelope decode failed");
            StorageError::UnarchiveFailed
        })
    }
}
