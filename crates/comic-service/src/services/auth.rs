//! Authentication service
//!
//! Handles user registration, login, token resolution, and logout. Tokens are
//! opaque random strings stored in the database; login revokes every earlier
//! token so each account holds at most one live session.

use tracing::{info, instrument, warn};

use comic_common::auth::{generate_token, hash_password, verify_password};
use comic_common::AppError;
use comic_core::entities::{NewUser, User};
use comic_core::policy;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and issue their first token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Check before inserting so the caller gets a field-level error;
        // the unique index still backstops concurrent registrations
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(
                comic_core::DomainError::EmailAlreadyExists,
            ));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser {
            name: request.name,
            email: request.email,
        };
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = user.id, "User registered successfully");

        let token = self.issue_token(user.id).await?;

        Ok(AuthResponse {
            token,
            user: CurrentUserResponse::from(&user),
        })
    }

    /// Login with email and password
    ///
    /// A failed login never reveals whether the email or the password was
    /// wrong. A successful login revokes all previously issued tokens.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Single-session policy: invalidate every earlier token
        self.ctx.token_repo().revoke_all_for_user(user.id).await?;

        let token = self.issue_token(user.id).await?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(LoginResponse {
            token,
            is_admin: user.is_admin,
            user: CurrentUserResponse::from(&user),
        })
    }

    /// Resolve a presented bearer token to its row id and owning user
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Option<(i64, User)>> {
        Ok(self.ctx.token_repo().find_user_by_token(token).await?)
    }

    /// Logout by revoking the presented token
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: i64, token_id: i64) -> ServiceResult<()> {
        self.ctx.token_repo().revoke(token_id).await?;
        info!(user_id, "User logged out successfully");
        Ok(())
    }

    /// Profile of the authenticated user
    pub fn current_user(&self, user: &User) -> CurrentUserResponse {
        CurrentUserResponse::from(user)
    }

    /// Whether the authenticated user holds the admin role
    pub fn check_admin(&self, user: &User) -> bool {
        policy::is_admin(user)
    }

    async fn issue_token(&self, user_id: i64) -> ServiceResult<String> {
        let token = generate_token();
        self.ctx.token_repo().issue(user_id, &token).await?;
        Ok(token)
    }
}
