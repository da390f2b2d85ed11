// tests/common.rs
//! Shared test utilities: logging setup and throwaway storage roots

use encrypted_storage::{Crypto, EncryptedStorage, EncryptionAlgorithm, StorageRoot};
use tempfile::TempDir;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Engine rooted in a fresh temp dir, removed on drop
#[allow(dead_code)]
pub struct TestStorage {
    pub storage: EncryptedStorage,
    dir: TempDir,
}

#[allow(dead_code)]
impl TestStorage {
    pub fn new(algorithm: EncryptionAlgorithm) -> Self {
        setup();
        let dir = tempfile::tempdir().expect("create temp storage root");
        let storage = EncryptedStorage::new(Crypto::new(algorithm), StorageRoot::new(dir.path()));
        Self { storage, dir }
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

impl Default for TestStorage {
    fn default() -> Self {
        Self::new(EncryptionAlgorithm::Aes)
    }
}
