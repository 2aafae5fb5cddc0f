//! Roster content checksums.
//!
//! A parsed roster is tagged with the SHA-256 of its source JSON so repeated
//! loads of the same file can be recognized.

use sha2::{Digest, Sha256};

/// SHA-256 of the roster JSON text, hex-encoded.
pub fn calculate_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
