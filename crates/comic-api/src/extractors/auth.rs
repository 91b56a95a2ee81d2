//! Authentication extractors
//!
//! Resolve the opaque bearer token from the Authorization header against the
//! access_tokens table. Tokens carry no claims, so every request hits the
//! database; the join also yields the user row handlers need anyway.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use comic_core::entities::User;
use comic_core::policy;
use comic_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from a bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    /// Row id of the presented token, used by logout
    pub token_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let service = AuthService::new(app_state.service_context());

        let (token_id, user) = service
            .authenticate(bearer.token())
            .await
            .map_err(ApiError::Service)?
            .ok_or_else(|| {
                tracing::warn!("Rejected unknown bearer token");
                ApiError::InvalidToken
            })?;

        Ok(CurrentUser { user, token_id })
    }
}

/// Authenticated user that must hold the admin role
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, state).await?;

        policy::require_admin(&current.user).map_err(ApiError::Domain)?;

        Ok(AdminUser(current))
    }
}

impl AdminUser {
    /// The underlying user
    pub fn user(&self) -> &User {
        &self.0.user
    }
}
