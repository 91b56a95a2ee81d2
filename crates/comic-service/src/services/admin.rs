//! Admin service
//!
//! Dashboard statistics and the user listing. Route-level guards already
//! require the admin role; the policy check here keeps the service safe to
//! call from anywhere.

use tracing::instrument;

use comic_core::entities::User;
use comic_core::policy;

use crate::dto::{AdminUserResponse, StatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate catalog statistics, read as one consistent snapshot
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn stats(&self, actor: &User) -> ServiceResult<StatsResponse> {
        policy::require_admin(actor)?;

        let stats = self.ctx.stats_repo().snapshot().await?;
        Ok(StatsResponse::from(stats))
    }

    /// All users with their owned-comic counts
    #[instrument(skip(self, actor), fields(user_id = actor.id))]
    pub async fn list_users(&self, actor: &User) -> ServiceResult<Vec<AdminUserResponse>> {
        policy::require_admin(actor)?;

        let users = self.ctx.user_repo().list_with_comic_counts().await?;
        Ok(users.iter().map(AdminUserResponse::from).collect())
    }
}
