//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Prices are
//! serialized as strings with exactly two decimal places.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Registration response with a freshly issued token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: CurrentUserResponse,
}

/// Login response; `is_admin` lets clients route to the admin dashboard
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub is_admin: bool,
    pub user: CurrentUserResponse,
}

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Catalog Responses
// ============================================================================

/// Comic owner, reduced to what listings need
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub id: i64,
    pub name: String,
}

/// Comic listing response
#[derive(Debug, Clone, Serialize)]
pub struct ComicResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    pub genre: String,
    pub category_id: Option<i64>,
    /// Always rendered with two decimal places, e.g. "9.99"
    pub price: String,
    pub status: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category response
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// One page of search results
#[derive(Debug, Serialize)]
pub struct ComicPageResponse {
    pub data: Vec<ComicResponse>,
    pub meta: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Result of flipping a comic's featured flag
#[derive(Debug, Serialize)]
pub struct FeaturedToggleResponse {
    pub featured: bool,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Aggregate catalog statistics for the admin dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_comics: i64,
    pub total_users: i64,
    pub published_comics: i64,
}

/// Admin user listing entry
#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub comics_count: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
