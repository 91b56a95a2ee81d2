//! Category handlers

use axum::{
    extract::{Path, State},
    Json,
};
use comic_service::{CategoryResponse, CategoryService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List all categories
///
/// GET /categories
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// A single category
///
/// GET /categories/:id
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}
