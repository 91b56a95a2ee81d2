//! Repository traits - persistence contracts for the domain
//!
//! Implemented in `comic-db` against PostgreSQL. All listings are
//! most-recent-first.

use async_trait::async_trait;

use crate::entities::{
    AccessToken, CatalogStats, Category, Comic, ComicChanges, NewComic, NewUser, User,
    UserWithComicCount,
};
use crate::error::DomainError;
use crate::value_objects::ComicStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Filter for catalog search; absent fields are not constrained
#[derive(Debug, Clone, Default)]
pub struct ComicQuery {
    /// Case-insensitive substring over title OR author OR genre
    pub term: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<ComicStatus>,
}

/// One page of search results with total-count metadata
#[derive(Debug, Clone)]
pub struct ComicPage {
    pub comics: Vec<(Comic, User)>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a user; fails with `EmailAlreadyExists` on a duplicate email.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// All users, most-recent-first, with owned-comic counts (admin listing)
    async fn list_with_comic_counts(&self) -> RepoResult<Vec<UserWithComicCount>>;
}

/// Opaque bearer token persistence operations
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Store a freshly generated token for the user
    async fn issue(&self, user_id: i64, token: &str) -> RepoResult<AccessToken>;

    /// Resolve a presented token to its row id and owning user
    async fn find_user_by_token(&self, token: &str) -> RepoResult<Option<(i64, User)>>;

    /// Delete a single token by row id (logout)
    async fn revoke(&self, token_id: i64) -> RepoResult<()>;

    /// Delete every token held by the user (login enforces a single session)
    async fn revoke_all_for_user(&self, user_id: i64) -> RepoResult<()>;
}

/// Category persistence operations
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> RepoResult<Vec<Category>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>>;
}

/// Comic persistence operations
#[async_trait]
pub trait ComicRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comic>>;

    async fn find_with_owner(&self, id: i64) -> RepoResult<Option<(Comic, User)>>;

    /// All comics with owners embedded
    async fn list_with_owners(&self) -> RepoResult<Vec<(Comic, User)>>;

    /// featured = true AND status = published
    async fn list_featured(&self) -> RepoResult<Vec<Comic>>;

    /// Published comics in the category, owners embedded
    async fn list_by_category(&self, category_id: i64) -> RepoResult<Vec<(Comic, User)>>;

    /// Every comic owned by the user, any status
    async fn list_by_owner(&self, user_id: i64) -> RepoResult<Vec<Comic>>;

    async fn search(&self, query: &ComicQuery, page: i64, per_page: i64) -> RepoResult<ComicPage>;

    async fn create(&self, comic: &NewComic) -> RepoResult<Comic>;

    /// Apply changes and return the refreshed row; `ComicNotFound` if absent
    async fn update(&self, id: i64, changes: &ComicChanges) -> RepoResult<Comic>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Atomically flip the featured flag, returning the new value
    async fn toggle_featured(&self, id: i64) -> RepoResult<bool>;
}

/// Aggregate statistics read as a single consistent snapshot
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn snapshot(&self) -> RepoResult<CatalogStats>;
}
