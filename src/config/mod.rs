// src/config/mod.rs
//! Configuration system for encrypted-storage
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, load_with, Cipher, Config, Storage};

mod app;
mod defaults;
