//! Request extractors

mod auth;
mod comic_form;
mod pagination;
mod validated;

pub use auth::{AdminUser, CurrentUser};
pub use comic_form::ComicForm;
pub use pagination::Page;
pub use validated::ValidatedJson;
