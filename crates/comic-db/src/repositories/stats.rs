//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use comic_core::entities::CatalogStats;
use comic_core::traits::{RepoResult, StatsRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    /// All three counts run as one statement, so they share a single snapshot
    /// even under concurrent writes and can never disagree with each other.
    #[instrument(skip(self))]
    async fn snapshot(&self) -> RepoResult<CatalogStats> {
        let (total_comics, total_users, published_comics) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                r"
                SELECT
                    (SELECT COUNT(*) FROM comics),
                    (SELECT COUNT(*) FROM users),
                    (SELECT COUNT(*) FROM comics WHERE status = 'published')
                ",
            )
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(CatalogStats {
            total_comics,
            total_users,
            published_comics,
        })
    }
}
