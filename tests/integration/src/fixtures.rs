//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests, plus response shapes
//! the assertions deserialize into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Reader {suffix}"),
            email: format!("reader{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            password_confirmation: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Comic payload builder
pub fn comic_payload(title: &str, price: &str) -> Value {
    json!({
        "title": title,
        "description": "A story about test coverage.",
        "author": "Test Author",
        "genre": "Adventure",
        "category_id": 1,
        "price": price,
    })
}

/// Registration/auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub is_admin: bool,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Comic response
#[derive(Debug, Deserialize)]
pub struct ComicResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub category_id: Option<i64>,
    pub price: String,
    pub status: String,
    pub featured: bool,
    pub image_url: Option<String>,
    pub user_id: i64,
    pub owner: Option<OwnerSummary>,
}

/// Comic owner summary
#[derive(Debug, Deserialize)]
pub struct OwnerSummary {
    pub id: i64,
    pub name: String,
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// One page of search results
#[derive(Debug, Deserialize)]
pub struct ComicPageResponse {
    pub data: Vec<ComicResponse>,
    pub meta: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Featured toggle response
#[derive(Debug, Deserialize)]
pub struct FeaturedToggleResponse {
    pub featured: bool,
}

/// Admin user listing entry
#[derive(Debug, Deserialize)]
pub struct AdminUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub comics_count: i64,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
