//! Authorization policy
//!
//! Pure functions of (current user, target resource). Handlers and services
//! never inspect `is_admin` or `user_id` directly; they go through here.

use crate::entities::{Comic, User};
use crate::error::DomainError;

/// Whether the user holds the admin role
#[inline]
#[must_use]
pub fn is_admin(user: &User) -> bool {
    user.is_admin
}

/// Whether the user may mutate the given comic (owner or admin)
#[inline]
#[must_use]
pub fn is_owner_or_admin(user: &User, comic: &Comic) -> bool {
    user.is_admin || comic.is_owned_by(user.id)
}

/// Require admin access, failing with `AdminRequired`
pub fn require_admin(user: &User) -> Result<(), DomainError> {
    if is_admin(user) {
        Ok(())
    } else {
        Err(DomainError::AdminRequired)
    }
}

/// Require owner-or-admin access, failing with `NotComicOwner`
pub fn require_owner_or_admin(user: &User, comic: &Comic) -> Result<(), DomainError> {
    if is_owner_or_admin(user, comic) {
        Ok(())
    } else {
        Err(DomainError::NotComicOwner)
    }
}
