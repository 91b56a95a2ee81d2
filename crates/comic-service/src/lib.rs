//! # comic-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;
pub mod storage;

pub use dto::{
    AdminUserResponse, AuthResponse, CategoryResponse, ComicPageResponse, ComicPayload,
    ComicResponse, CurrentUserResponse, FeaturedToggleResponse, HealthResponse, LoginRequest,
    LoginResponse, MessageResponse, PageMeta, ReadinessResponse, RegisterRequest, SearchParams,
    StatsResponse,
};
pub use services::{
    AdminService, AuthService, CatalogService, CategoryService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use storage::{ImageStore, ImageUpload};
