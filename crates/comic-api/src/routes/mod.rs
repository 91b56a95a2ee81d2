//! Route definitions
//!
//! All API routes organized by domain and mounted at the root. Uploaded cover
//! images are served statically under /images.

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use comic_common::AppConfig;
use serde_json::json;
use tower_http::services::ServeDir;

use crate::handlers::{admin, auth, categories, comics, health};
use crate::state::AppState;

/// Headroom above the image size cap for the non-file multipart fields, so an
/// image at the cap still fits in the request body and oversize images reach
/// the store's own size check
const MULTIPART_OVERHEAD: usize = 64 * 1024;

fn upload_body_limit(config: &AppConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.storage.max_upload_bytes() + MULTIPART_OVERHEAD)
}

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(comic_routes(config))
        .merge(category_routes())
        .merge(admin_routes(config))
        .nest_service("/images", ServeDir::new(config.storage.images_dir()))
        .fallback(route_not_found)
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Current-user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(auth::current_user))
        .route("/user/comics", get(comics::owned))
        .route("/check-admin", get(auth::check_admin))
}

/// Comic catalog routes
fn comic_routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        // Public browsing
        .route("/comics", get(comics::index))
        .route("/comics/search", get(comics::search))
        .route("/comics/featured", get(comics::featured))
        .route("/comics/by-category/:id", get(comics::by_category))
        .route("/comics/:id", get(comics::show))
        // Owner CRUD
        .route("/comics", post(comics::store))
        .route("/comics/:id", put(comics::update))
        .route("/comics/:id", delete(comics::destroy))
        .layer(upload_body_limit(config))
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::index))
        .route("/categories/:id", get(categories::show))
}

/// Admin routes
fn admin_routes(config: &AppConfig) -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(admin::stats))
        .route("/admin/users", get(admin::users))
        .route("/admin/comics", get(admin::comics))
        .route("/admin/comics", post(admin::store_comic))
        .route("/admin/comics/:id", put(admin::update_comic))
        .route("/admin/comics/:id", delete(admin::destroy_comic))
        .route("/admin/comics/:id/toggle-featured", post(admin::toggle_featured))
        .layer(upload_body_limit(config))
}

async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found." })),
    )
}
