// src/crypto/armor.rs
//! Base64 text form of raw cipher output
//!
//! Encoding wraps at [`ARMOR_LINE_LENGTH`] characters with CRLF line endings.
//! Decoding drops every character outside the standard alphabet first, so
//! wrapped, indented, or hand-edited text still decodes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::consts::ARMOR_LINE_LENGTH;

pub fn encode(raw: &[u8]) -> String {
    let flat = STANDARD.encode(raw);
    if flat.len() <= ARMOR_LINE_LENGTH {
        return flat;
    }

    let mut wrapped = String::with_capacity(flat.len() + 2 * (flat.len() / ARMOR_LINE_LENGTH));
    // base64 output is ASCII, so byte chunks are char boundaries
    for (i, line) in flat.as_bytes().chunks(ARMOR_LINE_LENGTH).enumerate() {
        if i > 0 {
            wrapped.push_str("\r\n");
        }
        wrapped.extend(line.iter().map(|&b| b as char));
    }
    wrapped
}

pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let filtered: String = text.chars().filter(|c| is_alphabet(*c)).collect();
    STANDARD.decode(filtered)
}

fn is_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}
