//! Admin handlers
//!
//! Every endpoint here requires the admin role via the `AdminUser` extractor.
//! Comic mutations reuse the catalog service; the owner-or-admin policy lets
//! an admin act on any comic.

use axum::{
    extract::{Path, State},
    Json,
};
use comic_service::{
    AdminService, AdminUserResponse, CatalogService, ComicResponse, FeaturedToggleResponse,
    MessageResponse, StatsResponse,
};

use crate::extractors::{AdminUser, ComicForm};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Catalog statistics
///
/// GET /admin/stats
pub async fn stats(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<StatsResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.stats(admin.user()).await?))
}

/// All registered users with their comic counts
///
/// GET /admin/users
pub async fn users(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<Vec<AdminUserResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_users(admin.user()).await?))
}

/// Every comic, drafts included
///
/// GET /admin/comics
pub async fn comics(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Create a comic owned by the admin
///
/// POST /admin/comics
pub async fn store_comic(
    State(state): State<AppState>,
    admin: AdminUser,
    form: ComicForm,
) -> ApiResult<Created<Json<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    let comic = service
        .create(admin.user(), form.payload, form.image)
        .await?;
    Ok(Created(Json(comic)))
}

/// Update any comic
///
/// PUT /admin/comics/:id
pub async fn update_comic(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
    form: ComicForm,
) -> ApiResult<Json<ComicResponse>> {
    let service = CatalogService::new(state.service_context());
    let comic = service
        .update(admin.user(), id, form.payload, form.image)
        .await?;
    Ok(Json(comic))
}

/// Delete any comic
///
/// DELETE /admin/comics/:id
pub async fn destroy_comic(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CatalogService::new(state.service_context());
    service.delete(admin.user(), id).await?;
    Ok(Json(MessageResponse::new("Comic deleted successfully.")))
}

/// Flip a comic's featured flag
///
/// POST /admin/comics/:id/toggle-featured
pub async fn toggle_featured(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<FeaturedToggleResponse>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.toggle_featured(admin.user(), id).await?))
}
