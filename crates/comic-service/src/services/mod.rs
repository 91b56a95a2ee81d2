//! Business logic services

mod admin;
mod auth;
mod catalog;
mod category;
mod context;
mod error;

pub use admin::AdminService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
