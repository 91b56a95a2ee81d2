//! Comic database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comics table
#[derive(Debug, Clone, FromRow)]
pub struct ComicModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub category_id: Option<i64>,
    pub price_cents: i64,
    pub status: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comic row joined with its owning user
///
/// Owner columns are aliased `owner_*` in the SELECT to avoid clashing with
/// the comic's own columns.
#[derive(Debug, Clone, FromRow)]
pub struct ComicWithOwnerModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub category_id: Option<i64>,
    pub price_cents: i64,
    pub status: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_is_admin: bool,
    pub owner_created_at: DateTime<Utc>,
    pub owner_updated_at: DateTime<Utc>,
}
