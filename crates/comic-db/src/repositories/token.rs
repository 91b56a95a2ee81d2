//! PostgreSQL implementation of TokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use comic_core::entities::{AccessToken, User};
use comic_core::traits::{RepoResult, TokenRepository};

use crate::models::AccessTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TokenRepository
#[derive(Clone)]
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PgTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    #[instrument(skip(self, token))]
    async fn issue(&self, user_id: i64, token: &str) -> RepoResult<AccessToken> {
        let result = sqlx::query_as::<_, AccessTokenModel>(
            r"
            INSERT INTO access_tokens (user_id, token)
            VALUES ($1, $2)
            RETURNING id, user_id, token, created_at
            ",
        )
        .bind(user_id)
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AccessToken::from(result))
    }

    #[instrument(skip(self, token))]
    async fn find_user_by_token(&self, token: &str) -> RepoResult<Option<(i64, User)>> {
        let result = sqlx::query_as::<_, TokenOwnerRow>(
            r"
            SELECT t.id AS token_id,
                   u.id, u.name, u.email, u.is_admin, u.created_at, u.updated_at
            FROM access_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|row| {
            let user = User {
                id: row.id,
                name: row.name,
                email: row.email,
                is_admin: row.is_admin,
                created_at: row.created_at,
                updated_at: row.updated_at,
            };
            (row.token_id, user)
        }))
    }

    #[instrument(skip(self))]
    async fn revoke(&self, token_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM access_tokens WHERE id = $1
            ",
        )
        .bind(token_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn revoke_all_for_user(&self, user_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM access_tokens WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

/// Joined token + owner row
#[derive(sqlx::FromRow)]
struct TokenOwnerRow {
    token_id: i64,
    id: i64,
    name: String,
    email: String,
    is_admin: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}
