//! Visitor fingerprinting from client address and agent.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 12;

/// Derives a short, stable visitor identifier.
///
/// Hashes `client_address + "|" + client_agent` with SHA-256 and keeps the
/// first [`FINGERPRINT_LEN`] hex characters. This is pseudo-identification for
/// dedup only: collisions merge two visitors and can only under-count.
pub fn fingerprint(client_address: &str, client_agent: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(client_address.as_bytes());
    hasher.update(b"|");
    hasher.update(client_agent.as_bytes());
    let digest = hasher.finalize();

    // 6 bytes encode to exactly 12 hex chars
    hex::encode(&digest[..FINGERPRINT_LEN / 2])
}
