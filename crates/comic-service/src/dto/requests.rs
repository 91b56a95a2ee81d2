//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use comic_core::value_objects::{ComicStatus, Price};

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Password confirmation does not match"))]
    pub password_confirmation: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Comic Requests
// ============================================================================

/// Comic create/update payload
///
/// Accepted both as a JSON body and as multipart form fields alongside an
/// optional cover image. Price parsing enforces at most two decimal places,
/// rounding half-up on the third.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ComicPayload {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 255, message = "Author must be 1-255 characters"))]
    pub author: String,

    #[validate(length(min = 1, max = 255, message = "Genre must be 1-255 characters"))]
    pub genre: String,

    pub category_id: i64,

    pub price: Price,

    /// Defaults to published when omitted
    #[serde(default)]
    pub status: ComicStatus,

    #[serde(default)]
    pub featured: bool,
}

// ============================================================================
// Search Requests
// ============================================================================

/// Catalog search query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Case-insensitive substring matched against title, author, and genre
    pub q: Option<String>,
    pub category_id: Option<i64>,
    pub status: Option<ComicStatus>,
}
