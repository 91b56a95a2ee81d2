//! PostgreSQL implementation of ComicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use comic_core::entities::{Comic, ComicChanges, NewComic, User};
use comic_core::traits::{ComicPage, ComicQuery, ComicRepository, RepoResult};

use crate::models::{ComicModel, ComicWithOwnerModel};

use super::error::{comic_not_found, map_db_error};

/// Comic columns selected in every single-table query
const COMIC_COLUMNS: &str = "id, title, description, author, genre, category_id, price_cents, \
                             status, featured, image_url, user_id, created_at, updated_at";

/// PostgreSQL implementation of ComicRepository
#[derive(Clone)]
pub struct PgComicRepository {
    pool: PgPool,
}

impl PgComicRepository {
    /// Create a new PgComicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComicRepository for PgComicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comic>> {
        let result = sqlx::query_as::<_, ComicModel>(&format!(
            "SELECT {COMIC_COLUMNS} FROM comics WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comic::from))
    }

    #[instrument(skip(self))]
    async fn find_with_owner(&self, id: i64) -> RepoResult<Option<(Comic, User)>> {
        let result = sqlx::query_as::<_, ComicWithOwnerModel>(
            r"
            SELECT c.id, c.title, c.description, c.author, c.genre, c.category_id,
                   c.price_cents, c.status, c.featured, c.image_url, c.user_id,
                   c.created_at, c.updated_at,
                   u.name AS owner_name, u.email AS owner_email, u.is_admin AS owner_is_admin,
                   u.created_at AS owner_created_at, u.updated_at AS owner_updated_at
            FROM comics c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn list_with_owners(&self) -> RepoResult<Vec<(Comic, User)>> {
        let result = sqlx::query_as::<_, ComicWithOwnerModel>(
            r"
            SELECT c.id, c.title, c.description, c.author, c.genre, c.category_id,
                   c.price_cents, c.status, c.featured, c.image_url, c.user_id,
                   c.created_at, c.updated_at,
                   u.name AS owner_name, u.email AS owner_email, u.is_admin AS owner_is_admin,
                   u.created_at AS owner_created_at, u.updated_at AS owner_updated_at
            FROM comics c
            JOIN users u ON u.id = c.user_id
            ORDER BY c.created_at DESC, c.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn list_featured(&self) -> RepoResult<Vec<Comic>> {
        let result = sqlx::query_as::<_, ComicModel>(&format!(
            "SELECT {COMIC_COLUMNS} FROM comics \
             WHERE featured = TRUE AND status = 'published' \
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Comic::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_category(&self, category_id: i64) -> RepoResult<Vec<(Comic, User)>> {
        let result = sqlx::query_as::<_, ComicWithOwnerModel>(
            r"
            SELECT c.id, c.title, c.description, c.author, c.genre, c.category_id,
                   c.price_cents, c.status, c.featured, c.image_url, c.user_id,
                   c.created_at, c.updated_at,
                   u.name AS owner_name, u.email AS owner_email, u.is_admin AS owner_is_admin,
                   u.created_at AS owner_created_at, u.updated_at AS owner_updated_at
            FROM comics c
            JOIN users u ON u.id = c.user_id
            WHERE c.category_id = $1 AND c.status = 'published'
            ORDER BY c.created_at DESC, c.id DESC
            ",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, user_id: i64) -> RepoResult<Vec<Comic>> {
        let result = sqlx::query_as::<_, ComicModel>(&format!(
            "SELECT {COMIC_COLUMNS} FROM comics \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Comic::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &ComicQuery, page: i64, per_page: i64) -> RepoResult<ComicPage> {
        // NULL binds leave a filter unconstrained
        let pattern = query.term.as_ref().map(|t| format!("%{t}%"));
        let status = query.status.map(|s| s.as_str());

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM comics c
            WHERE ($1::TEXT IS NULL OR c.title ILIKE $1 OR c.author ILIKE $1 OR c.genre ILIKE $1)
              AND ($2::BIGINT IS NULL OR c.category_id = $2)
              AND ($3::TEXT IS NULL OR c.status = $3)
            ",
        )
        .bind(&pattern)
        .bind(query.category_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, ComicWithOwnerModel>(
            r"
            SELECT c.id, c.title, c.description, c.author, c.genre, c.category_id,
                   c.price_cents, c.status, c.featured, c.image_url, c.user_id,
                   c.created_at, c.updated_at,
                   u.name AS owner_name, u.email AS owner_email, u.is_admin AS owner_is_admin,
                   u.created_at AS owner_created_at, u.updated_at AS owner_updated_at
            FROM comics c
            JOIN users u ON u.id = c.user_id
            WHERE ($1::TEXT IS NULL OR c.title ILIKE $1 OR c.author ILIKE $1 OR c.genre ILIKE $1)
              AND ($2::BIGINT IS NULL OR c.category_id = $2)
              AND ($3::TEXT IS NULL OR c.status = $3)
            ORDER BY c.created_at DESC, c.id DESC
            LIMIT $4 OFFSET $5
            ",
        )
        .bind(&pattern)
        .bind(query.category_id)
        .bind(status)
        .bind(per_page)
        .bind((page - 1).saturating_mul(per_page))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ComicPage {
            comics: rows.into_iter().map(Into::into).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, comic))]
    async fn create(&self, comic: &NewComic) -> RepoResult<Comic> {
        let result = sqlx::query_as::<_, ComicModel>(&format!(
            "INSERT INTO comics (title, description, author, genre, category_id, price_cents, \
                                 status, featured, image_url, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COMIC_COLUMNS}"
        ))
        .bind(&comic.title)
        .bind(&comic.description)
        .bind(&comic.author)
        .bind(&comic.genre)
        .bind(comic.category_id)
        .bind(comic.price.cents())
        .bind(comic.status.as_str())
        .bind(comic.featured)
        .bind(&comic.image_url)
        .bind(comic.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comic::from(result))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: &ComicChanges) -> RepoResult<Comic> {
        // COALESCE keeps the stored image when no replacement was uploaded
        let result = sqlx::query_as::<_, ComicModel>(&format!(
            "UPDATE comics \
             SET title = $2, description = $3, author = $4, genre = $5, category_id = $6, \
                 price_cents = $7, status = $8, featured = $9, \
                 image_url = COALESCE($10, image_url), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COMIC_COLUMNS}"
        ))
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.author)
        .bind(&changes.genre)
        .bind(changes.category_id)
        .bind(changes.price.cents())
        .bind(changes.status.as_str())
        .bind(changes.featured)
        .bind(&changes.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Comic::from).ok_or_else(|| comic_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comics WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comic_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn toggle_featured(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            UPDATE comics
            SET featured = NOT featured, updated_at = NOW()
            WHERE id = $1
            RETURNING featured
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.ok_or_else(|| comic_not_found(id))
    }
}
