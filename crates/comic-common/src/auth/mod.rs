//! Authentication primitives
//!
//! Password hashing and opaque bearer-token generation.

mod password;
mod token;

pub use password::{hash_password, verify_password};
pub use token::{generate_token, TOKEN_LENGTH};
