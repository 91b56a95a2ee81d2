//! # comic-core
//!
//! Domain layer containing entities, value objects, the authorization policy,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AccessToken, Category, CatalogStats, Comic, ComicChanges, NewComic, NewUser, User, UserWithComicCount};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, ComicPage, ComicQuery, ComicRepository, RepoResult, StatsRepository,
    TokenRepository, UserRepository,
};
pub use value_objects::{ComicStatus, Price, PriceParseError};
