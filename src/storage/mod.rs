// src/storage/mod.rs
//! On-disk persistence of encrypted artifacts
//!
//! An artifact is the versioned [`container`] around a JSON [`Envelope`]
//! whose single `message` field holds the base64 ciphertext.

pub mod container;
mod engine;
mod envelope;
mod path;

pub use container::{archive, archive_bytes, unarchive, unarchive_bytes, ArchivePayload};
pub use engine::{EncryptedStorable, EncryptedStorage, Result};
pub use envelope::Envelope;
pub use path::StorageRoot;
