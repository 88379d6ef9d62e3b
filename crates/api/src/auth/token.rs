//! Opaque credential tokens and their storage digests.
//!
//! Session tokens are random 192-bit strings; only their SHA-256 hex digest
//! is stored server-side so a database leak does not compromise active
//! sessions. Magic-link tokens are issued out of band under the `ml_`
//! namespace and digested the same way at lookup time.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Namespace prefix for session tokens.
///
/// Keeps session credentials textually distinct from magic-link tokens
/// (`ml_`), so a credential pasted in the wrong field fails fast.
pub const SESSION_TOKEN_PREFIX: &str = "sess_";

/// Random bytes per session token (192 bits of entropy).
const TOKEN_BYTES: usize = 24;

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_digest)`. The plaintext
/// is sent to the client once; only the digest is persisted.
pub fn generate_session_token() -> (String, String) {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    let mut hex = String::with_capacity(TOKEN_BYTES * 2);
    for byte in bytes {
        hex.push_str(&format!("{byte:02x}"));
    }

    let plaintext = format!("{SESSION_TOKEN_PREFIX}{hex}");
    let hash = hash_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a token.
///
/// Use this to compare an incoming token (of either kind) against the
/// stored digest.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
