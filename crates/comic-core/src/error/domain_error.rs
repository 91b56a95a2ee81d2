//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Comic not found: {0}")]
    ComicNotFound(i64),

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("The email has already been taken")]
    EmailAlreadyExists,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the comic owner")]
    NotComicOwner,

    #[error("Administrator access required")]
    AdminRequired,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ComicNotFound(_) => "UNKNOWN_COMIC",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvalidPrice(_) => "INVALID_PRICE",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::NotComicOwner => "NOT_COMIC_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ComicNotFound(_) | Self::CategoryNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Duplicate email counts as validation: registration surfaces it as a
    /// field-level error, not a conflict.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmailAlreadyExists
                | Self::InvalidPrice(_)
                | Self::InvalidStatus(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotComicOwner | Self::AdminRequired)
    }
}
