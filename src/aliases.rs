// src/aliases.rs
//! secure-gate secret types used throughout encrypted-storage

pub use secure_gate::dynamic_alias;

// Passphrase bytes fitted to a cipher's key length, zeroized on drop
dynamic_alias!(KeyMaterial, Vec<u8>);
