//! Domain entities

mod category;
mod comic;
mod token;
mod user;

pub use category::Category;
pub use comic::{CatalogStats, Comic, ComicChanges, NewComic};
pub use token::AccessToken;
pub use user::{NewUser, User, UserWithComicCount};
