// src/storage/path.rs
//! Logical artifact name → absolute file path
//!
//! Every artifact lives directly inside one base directory. Names must be a
//! single plain path component; anything that could climb out of the base
//! (separators, `.`/`..`, NUL) resolves to nothing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Base directory holding every stored artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoot {
    base: PathBuf,
}

impl StorageRoot {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The current user's documents directory, or the local data directory
    /// on platforms without one
    pub fn platform_default() -> Option<Self> {
        dirs::document_dir()
            .or_else(dirs::data_local_dir)
            .map(Self::new)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve `name` inside the base directory, creating the base if absent
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if !is_plain_component(name) {
            debug!(name, "rejected artifact name");
            return None;
        }
        if let Err(err) = fs::create_dir_all(&self.base) {
            debug!(base = %self.base.display(), error = %err, "storage root unavailable");
            return None;
        }
        Some(self.base.join(name))
    }
}

fn is_plain_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
