//! Content-derived identities.

use sha2::{Digest, Sha256};

/// Derives the stable identity of a string: the lower-case hex SHA-256 digest
/// of its raw UTF-8 bytes, with no normalization or trimming.
///
/// Both the creation path and the analysis path call through here, so the
/// stored `id` and the reported `sha256_hash` can never diverge.
pub fn content_address(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}
