// src/storage/container.rs
//! Versioned outer container of a stored artifact
//!
//! ```text
//! magic   4 bytes  "ESAR"
//! version 1 byte   0x01
//! kind    1 byte   0x01 = raw bytes, 0x02 = numeric (f64, big-endian)
//! length  8 bytes  big-endian payload length
//! payload length bytes
//! ```
//!
//! Artifacts always carry raw bytes; the numeric kind exists so a container
//! can be recognised and still refused by [`unarchive_bytes`].

use tracing::debug;

use crate::consts::{ARCHIVE_HEADER_LEN, ARCHIVE_MAGIC, ARCHIVE_VERSION};
use crate::error::StorageError;

const KIND_BYTES: u8 = 0x01;
const KIND_NUMBER: u8 = 0x02;

#[derive(Debug, Clone, PartialEq)]
pub enum ArchivePayload {
    Bytes(Vec<u8>),
    Number(f64),
}

impl ArchivePayload {
    fn kind(&self) -> u8 {
        match self {
            Self::Bytes(_) => KIND_BYTES,
            Self::Number(_) => KIND_NUMBER,
        }
    }
}

pub fn archive(payload: &ArchivePayload) -> Vec<u8> {
    let number;
    let body: &[u8] = match payload {
        ArchivePayload::Bytes(bytes) => bytes,
        ArchivePayload::Number(value) => {
            number = value.to_be_bytes();
            &number
        }
    };

    write_container(payload.kind(), body)
}

/// Archive a raw byte payload without copying it into an [`ArchivePayload`]
pub fn archive_bytes(bytes: &[u8]) -> Vec<u8> {
    write_container(KIND_BYTES, bytes)
}

fn write_container(kind: u8, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ARCHIVE_HEADER_LEN + body.len());
    out.extend_from_slice(ARCHIVE_MAGIC);
    out.push(ARCHIVE_VERSION);
    out.push(kind);
    out.extend_from_slice(&(body.len() as u64).to_be_bytes());
    out.extend_from_slice(body);
    out
}

pub fn unarchive(data: &[u8]) -> Result<ArchivePayload, StorageError> {
    if data.len() < ARCHIVE_HEADER_LEN {
        return Err(reject("truncated header"));
    }
    let (header, body) = data.split_at(ARCHIVE_HEADER_LEN);
    if &header[..4] != ARCHIVE_MAGIC {
        return Err(reject("bad magic"));
    }
    if header[4] != ARCHIVE_VERSION {
        debug!(version = header[4], "unsupported container version");
        return Err(StorageError::UnarchiveFailed);
    }

    let mut len = [0u8; 8];
    len.copy_from_slice(&header[6..14]);
    if u64::try_from(body.len()).ok() != Some(u64::from_be_bytes(len)) {
        return Err(reject("payload length mismatch"));
    }

    match header[5] {
        KIND_BYTES => Ok(ArchivePayload::Bytes(body.to_vec())),
        KIND_NUMBER => {
            let raw: [u8; 8] = body
                .try_into()
                .map_err(|_| reject("numeric payload is not 8 bytes"))?;
            Ok(ArchivePayload::Number(f64::from_be_bytes(raw)))
        }
        kind => {
            debug!(kind, "unknown container payload kind");
            Err(StorageError::UnarchiveFailed)
        }
    }
}

/// Unwrap a container that must hold raw bytes
pub fn unarchive_bytes(data: &[u8]) -> Result<Vec<u8>, StorageError> {
    match unarchive(data)? {
        ArchivePayload::Bytes(bytes) => Ok(bytes),
        ArchivePayload::Number(_) => Err(reject("expected raw bytes, found numeric payload")),
    }
}

fn reject(reason: &'static str) -> StorageError {
    debug!(reason, "container rejected");
    StorageError::UnarchiveFailed
}
