//! Comic catalog handlers
//!
//! Public browsing endpoints plus the authenticated CRUD surface. Ownership
//! checks happen in the service layer.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use comic_service::{
    CatalogService, ComicPageResponse, ComicResponse, MessageResponse, SearchParams,
};

use crate::extractors::{ComicForm, CurrentUser, Page};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List every comic in the catalog
///
/// GET /comics
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<Vec<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Search comics with optional filters and pagination
///
/// GET /comics/search
pub async fn search(
    State(state): State<AppState>,
    page: Page,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<ComicPageResponse>> {
    let service = CatalogService::new(state.service_context());
    let result = service.search(&params, page.page, page.per_page).await?;
    Ok(Json(result))
}

/// Featured comics
///
/// GET /comics/featured
pub async fn featured(State(state): State<AppState>) -> ApiResult<Json<Vec<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.featured().await?))
}

/// Published comics in a category
///
/// GET /comics/by-category/:id
pub async fn by_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.by_category(id).await?))
}

/// A single comic
///
/// GET /comics/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ComicResponse>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// Comics owned by the authenticated user, drafts included
///
/// GET /user/comics
pub async fn owned(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<Vec<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.owned(&current.user).await?))
}

/// Create a comic owned by the authenticated user
///
/// POST /comics
pub async fn store(
    State(state): State<AppState>,
    current: CurrentUser,
    form: ComicForm,
) -> ApiResult<Created<Json<ComicResponse>>> {
    let service = CatalogService::new(state.service_context());
    let comic = service
        .create(&current.user, form.payload, form.image)
        .await?;
    Ok(Created(Json(comic)))
}

/// Update a comic (owner or admin)
///
/// PUT /comics/:id
pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
    form: ComicForm,
) -> ApiResult<Json<ComicResponse>> {
    let service = CatalogService::new(state.service_context());
    let comic = service
        .update(&current.user, id, form.payload, form.image)
        .await?;
    Ok(Json(comic))
}

/// Delete a comic (owner or admin)
///
/// DELETE /comics/:id
pub async fn destroy(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = CatalogService::new(state.service_context());
    service.delete(&current.user, id).await?;
    Ok(Json(MessageResponse::new("Comic deleted successfully.")))
}
