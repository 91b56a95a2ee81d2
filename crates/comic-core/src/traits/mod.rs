//! Repository traits implemented by the persistence layer

mod repositories;

pub use repositories::{
    CategoryRepository, ComicPage, ComicQuery, ComicRepository, RepoResult, StatsRepository,
    TokenRepository, UserRepository,
};
