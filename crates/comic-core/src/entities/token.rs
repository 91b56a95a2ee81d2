//! Access token entity - an opaque bearer session

use chrono::{DateTime, Utc};

/// An opaque bearer token bound to exactly one user.
///
/// Login revokes all prior tokens for the user before issuing a new one, so at
/// most one token is live per account (single active session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
