//! Catalog service
//!
//! Comic CRUD, featured listings, category browsing, search, and ownership
//! enforcement. Mutations go through `comic_core::policy` so the owner-or-admin
//! rule lives in exactly one place.

use tracing::{info, instrument};

use comic_core::entities::{Comic, ComicChanges, NewComic, User};
use comic_core::policy;
use comic_core::traits::ComicQuery;
use comic_core::DomainError;

use crate::dto::{
    ComicPageResponse, ComicPayload, ComicResponse, FeaturedToggleResponse, PageMeta, SearchParams,
};
use crate::storage::ImageUpload;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All comics, most-recent-first, with owners embedded
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ComicResponse>> {
        let rows = self.ctx.comic_repo().list_with_owners().await?;
        Ok(rows
            .iter()
            .map(|(comic, owner)| ComicResponse::with_owner(comic, owner))
            .collect())
    }

    /// A single comic with its owner
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ComicResponse> {
        let (comic, owner) = self
            .ctx
            .comic_repo()
            .find_with_owner(id)
            .await?
            .ok_or(DomainError::ComicNotFound(id))?;

        Ok(ComicResponse::with_owner(&comic, &owner))
    }

    /// Featured comics; drafts never appear here even when flagged
    #[instrument(skip(self))]
    pub async fn featured(&self) -> ServiceResult<Vec<ComicResponse>> {
        let comics = self.ctx.comic_repo().list_featured().await?;
        Ok(comics.iter().map(ComicResponse::from).collect())
    }

    /// Published comics in a category
    #[instrument(skip(self))]
    pub async fn by_category(&self, category_id: i64) -> ServiceResult<Vec<ComicResponse>> {
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound(category_id))?;

        let rows = self.ctx.comic_repo().list_by_category(category_id).await?;
        Ok(rows
            .iter()
            .map(|(comic, owner)| ComicResponse::with_owner(comic, owner))
            .collect())
    }

    /// Every comic owned by the user, drafts included
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn owned(&self, user: &User) -> ServiceResult<Vec<ComicResponse>> {
        let comics = self.ctx.comic_repo().list_by_owner(user.id).await?;
        Ok(comics.iter().map(ComicResponse::from).collect())
    }

    /// Search with optional term, category, and status filters
    #[instrument(skip(self, params))]
    pub async fn search(
        &self,
        params: &SearchParams,
        page: i64,
        per_page: i64,
    ) -> ServiceResult<ComicPageResponse> {
        let query = ComicQuery {
            term: params.q.as_ref().filter(|q| !q.is_empty()).cloned(),
            category_id: params.category_id,
            status: params.status,
        };

        let result = self.ctx.comic_repo().search(&query, page, per_page).await?;

        Ok(ComicPageResponse {
            data: result
                .comics
                .iter()
                .map(|(comic, owner)| ComicResponse::with_owner(comic, owner))
                .collect(),
            meta: PageMeta {
                total: result.total,
                page: result.page,
                per_page: result.per_page,
            },
        })
    }

    /// Create a comic owned by the actor
    #[instrument(skip(self, actor, payload, image), fields(user_id = actor.id))]
    pub async fn create(
        &self,
        actor: &User,
        payload: ComicPayload,
        image: Option<ImageUpload>,
    ) -> ServiceResult<ComicResponse> {
        self.ensure_category(payload.category_id).await?;

        let image_url = match image {
            Some(upload) => Some(self.ctx.image_store().store(&upload).await?),
            None => None,
        };

        let new_comic = NewComic {
            title: payload.title,
            description: payload.description,
            author: payload.author,
            genre: payload.genre,
            category_id: payload.category_id,
            price: payload.price,
            status: payload.status,
            featured: payload.featured,
            image_url,
            user_id: actor.id,
        };

        let comic = self.ctx.comic_repo().create(&new_comic).await?;

        info!(comic_id = comic.id, "Comic created");

        Ok(ComicResponse::with_owner(&comic, actor))
    }

    /// Update a comic; only its owner or an admin may do so
    ///
    /// A replacement image is written before the row update and the previous
    /// file removed after it, so a failed update never orphans the live image.
    #[instrument(skip(self, actor, payload, image), fields(user_id = actor.id))]
    pub async fn update(
        &self,
        actor: &User,
        id: i64,
        payload: ComicPayload,
        image: Option<ImageUpload>,
    ) -> ServiceResult<ComicResponse> {
        let (existing, owner) = self
            .ctx
            .comic_repo()
            .find_with_owner(id)
            .await?
            .ok_or(DomainError::ComicNotFound(id))?;
        policy::require_owner_or_admin(actor, &existing)?;

        self.ensure_category(payload.category_id).await?;

        let new_image_url = match image {
            Some(upload) => Some(self.ctx.image_store().store(&upload).await?),
            None => None,
        };
        let replacing = new_image_url.is_some();

        let changes = ComicChanges {
            title: payload.title,
            description: payload.description,
            author: payload.author,
            genre: payload.genre,
            category_id: payload.category_id,
            price: payload.price,
            status: payload.status,
            featured: payload.featured,
            image_url: new_image_url,
        };

        let updated = self.ctx.comic_repo().update(id, &changes).await?;

        if replacing {
            if let Some(old_url) = existing.image_url.as_deref() {
                self.ctx.image_store().delete(old_url).await?;
            }
        }

        info!(comic_id = id, "Comic updated");

        Ok(ComicResponse::with_owner(&updated, &owner))
    }

    /// Delete a comic and its stored cover image
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn delete(&self, actor: &User, id: i64) -> ServiceResult<()> {
        let existing = self.fetch(id).await?;
        policy::require_owner_or_admin(actor, &existing)?;

        self.ctx.comic_repo().delete(id).await?;

        if let Some(url) = existing.image_url.as_deref() {
            self.ctx.image_store().delete(url).await?;
        }

        info!(comic_id = id, "Comic deleted");

        Ok(())
    }

    /// Flip a comic's featured flag (admin only)
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn toggle_featured(
        &self,
        actor: &User,
        id: i64,
    ) -> ServiceResult<FeaturedToggleResponse> {
        policy::require_admin(actor)?;

        let featured = self.ctx.comic_repo().toggle_featured(id).await?;

        info!(comic_id = id, featured, "Featured flag toggled");

        Ok(FeaturedToggleResponse { featured })
    }

    async fn fetch(&self, id: i64) -> ServiceResult<Comic> {
        Ok(self
            .ctx
            .comic_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ComicNotFound(id))?)
    }

    /// Reject payloads naming a category that does not exist
    ///
    /// Reported as a validation failure, not a 404: the missing resource is a
    /// field of the request body, not the request target.
    async fn ensure_category(&self, category_id: i64) -> ServiceResult<()> {
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                ServiceError::validation(format!("category_id {category_id} does not exist"))
            })
    }
}
