//! Comic entity - a catalog listing owned by a user

use chrono::{DateTime, Utc};

use crate::value_objects::{ComicStatus, Price};

/// A comic listing. `user_id` is the sole authority for ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comic {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub category_id: Option<i64>,
    pub price: Price,
    pub status: ComicStatus,
    pub featured: bool,
    pub image_url: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comic {
    /// Check whether the given user owns this comic
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Validated fields for creating a comic
#[derive(Debug, Clone)]
pub struct NewComic {
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub category_id: i64,
    pub price: Price,
    pub status: ComicStatus,
    pub featured: bool,
    pub image_url: Option<String>,
    pub user_id: i64,
}

/// Validated fields for updating a comic
///
/// `image_url` is `None` when the stored image should be left untouched.
#[derive(Debug, Clone)]
pub struct ComicChanges {
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub category_id: i64,
    pub price: Price,
    pub status: ComicStatus,
    pub featured: bool,
    pub image_url: Option<String>,
}

/// Aggregate counts for the admin dashboard, read as one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_comics: i64,
    pub total_users: i64,
    pub published_comics: i64,
}
