// src/consts.rs
//! Shared constants: artifact format and configuration defaults

/// Magic bytes opening every stored artifact container
pub const ARCHIVE_MAGIC: &[u8; 4] = b"ESAR";

/// Current container format version
pub const ARCHIVE_VERSION: u8 = 1;

/// magic + version + kind + u64 length
pub const ARCHIVE_HEADER_LEN: usize = 4 + 1 + 1 + 8;

/// Base64 ciphertext is wrapped at this many characters per line (CRLF)
pub const ARMOR_LINE_LENGTH: usize = 64;

/// Config file read when `ESTORE_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "encrypted-storage.toml";

/// Environment variable naming the config file
pub const ENV_CONFIG_PATH: &str = "ESTORE_CONFIG";

/// Environment variable overriding `storage.root`
pub const ENV_STORAGE_ROOT: &str = "ESTORE_ROOT";

/// Environment variable overriding `cipher.algorithm`
pub const ENV_ALGORITHM: &str = "ESTORE_ALGORITHM";
