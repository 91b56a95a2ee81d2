//! User entity <-> model mapper

use comic_core::entities::{User, UserWithComicCount};

use crate::models::{UserModel, UserWithCountModel};

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert UserWithCountModel to UserWithComicCount entity
impl From<UserWithCountModel> for UserWithComicCount {
    fn from(model: UserWithCountModel) -> Self {
        UserWithComicCount {
            user: User {
                id: model.id,
                name: model.name,
                email: model.email,
                is_admin: model.is_admin,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            comics_count: model.comics_count,
        }
    }
}
