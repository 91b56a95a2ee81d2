//! Opaque access token generation
//!
//! Tokens are random alphanumeric strings stored server-side; presenting one
//! is the only way to authenticate. No claims are embedded in the token
//! itself, so revocation is a plain row delete.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated access tokens in characters
pub const TOKEN_LENGTH: usize = 48;

/// Generate a fresh opaque bearer token
#[must_use]
pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
