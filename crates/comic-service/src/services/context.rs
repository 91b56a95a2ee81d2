//! Service context - dependency container for services
//!
//! Holds all repositories and the image store needed by services.

use std::sync::Arc;

use comic_core::traits::{
    CategoryRepository, ComicRepository, StatsRepository, TokenRepository, UserRepository,
};
use comic_db::PgPool;

use crate::storage::ImageStore;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The cover image store
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn TokenRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    comic_repo: Arc<dyn ComicRepository>,
    stats_repo: Arc<dyn StatsRepository>,

    // Storage
    image_store: Arc<ImageStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        token_repo: Arc<dyn TokenRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comic_repo: Arc<dyn ComicRepository>,
        stats_repo: Arc<dyn StatsRepository>,
        image_store: Arc<ImageStore>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            token_repo,
            category_repo,
            comic_repo,
            stats_repo,
            image_store,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the token repository
    pub fn token_repo(&self) -> &dyn TokenRepository {
        self.token_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the comic repository
    pub fn comic_repo(&self) -> &dyn ComicRepository {
        self.comic_repo.as_ref()
    }

    /// Get the stats repository
    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }

    /// Get the cover image store
    pub fn image_store(&self) -> &ImageStore {
        self.image_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("image_store", &self.image_store)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    token_repo: Option<Arc<dyn TokenRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    comic_repo: Option<Arc<dyn ComicRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
    image_store: Option<Arc<ImageStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn token_repo(mut self, repo: Arc<dyn TokenRepository>) -> Self {
        self.token_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn comic_repo(mut self, repo: Arc<dyn ComicRepository>) -> Self {
        self.comic_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn image_store(mut self, store: Arc<ImageStore>) -> Self {
        self.image_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.token_repo
                .ok_or_else(|| ServiceError::validation("token_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.comic_repo
                .ok_or_else(|| ServiceError::validation("comic_repo is required"))?,
            self.stats_repo
                .ok_or_else(|| ServiceError::validation("stats_repo is required"))?,
            self.image_store
                .ok_or_else(|| ServiceError::validation("image_store is required"))?,
        ))
    }
}
