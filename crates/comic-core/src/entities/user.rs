//! User entity - a registered account in the portal

use chrono::{DateTime, Utc};

/// A registered user. The password hash lives in the persistence layer, never
/// on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// A user annotated with the number of comics they own (admin listing)
#[derive(Debug, Clone)]
pub struct UserWithComicCount {
    pub user: User,
    pub comics_count: i64,
}
