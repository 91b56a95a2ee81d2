//! Database models with SQLx `FromRow` derives

mod category;
mod comic;
mod token;
mod user;

pub use category::CategoryModel;
pub use comic::{ComicModel, ComicWithOwnerModel};
pub use token::AccessTokenModel;
pub use user::{UserModel, UserWithCountModel};
