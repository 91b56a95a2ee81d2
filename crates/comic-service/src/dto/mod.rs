//! Data transfer objects for the HTTP API

mod mappers;
mod requests;
mod responses;

pub use requests::{ComicPayload, LoginRequest, RegisterRequest, SearchParams};
pub use responses::{
    AdminUserResponse, AuthResponse, CategoryResponse, ComicPageResponse, ComicResponse,
    CurrentUserResponse, FeaturedToggleResponse, HealthResponse, LoginResponse, MessageResponse,
    OwnerSummary, PageMeta, ReadinessResponse, StatsResponse,
};
