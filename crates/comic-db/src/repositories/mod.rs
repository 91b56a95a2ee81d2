//! PostgreSQL repository implementations

mod category;
mod comic;
mod error;
mod stats;
mod token;
mod user;

pub use category::PgCategoryRepository;
pub use comic::PgComicRepository;
pub use stats::PgStatsRepository;
pub use token::PgTokenRepository;
pub use user::PgUserRepository;
