//! BLAKE3 hashing utilities for build artifacts

use std::path::Path;

use blake3::Hasher;

use crate::error::{self, Result};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of in-memory content
pub fn hash_str(content: &str) -> String {
    hash_bytes(content.as_bytes())
}

/// Calculate BLAKE3 hash of raw bytes
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(content);
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(error::fs::read_error(path))?;
    Ok(hash_bytes(&content))
}
