//! Authentication handlers
//!
//! Endpoints for user registration, login, logout, and the current profile.

use axum::{extract::State, Json};
use comic_service::{
    AuthResponse, AuthService, CurrentUserResponse, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Logout by revoking the presented token
///
/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.logout(current.user.id, current.token_id).await?;
    Ok(Json(MessageResponse::new("Logged out successfully.")))
}

/// Profile of the authenticated user
///
/// GET /user
pub async fn current_user(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    Ok(Json(service.current_user(&current.user)))
}

/// Admin role check response body
#[derive(Debug, serde::Serialize)]
pub struct CheckAdminResponse {
    pub is_admin: bool,
}

/// Whether the authenticated user holds the admin role
///
/// GET /check-admin
pub async fn check_admin(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<Json<CheckAdminResponse>> {
    let service = AuthService::new(state.service_context());
    Ok(Json(CheckAdminResponse {
        is_admin: service.check_admin(&current.user),
    }))
}
