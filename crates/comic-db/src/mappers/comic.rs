//! Comic entity <-> model mappers

use comic_core::entities::{Comic, User};
use comic_core::value_objects::Price;

use crate::models::{ComicModel, ComicWithOwnerModel};

/// Convert ComicModel to Comic entity
///
/// The status and price columns carry CHECK constraints, so values the domain
/// types reject can only come from a bad manual edit; both fall back to their
/// defaults.
impl From<ComicModel> for Comic {
    fn from(model: ComicModel) -> Self {
        Comic {
            id: model.id,
            title: model.title,
            description: model.description,
            author: model.author,
            genre: model.genre,
            category_id: model.category_id,
            price: Price::from_cents(model.price_cents).unwrap_or_default(),
            status: model.status.parse().unwrap_or_default(),
            featured: model.featured,
            image_url: model.image_url,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split a joined row into the comic and its owning user
impl From<ComicWithOwnerModel> for (Comic, User) {
    fn from(model: ComicWithOwnerModel) -> Self {
        let owner = User {
            id: model.user_id,
            name: model.owner_name,
            email: model.owner_email,
            is_admin: model.owner_is_admin,
            created_at: model.owner_created_at,
            updated_at: model.owner_updated_at,
        };
        let comic = Comic {
            id: model.id,
            title: model.title,
            description: model.description,
            author: model.author,
            genre: model.genre,
            category_id: model.category_id,
            price: Price::from_cents(model.price_cents).unwrap_or_default(),
            status: model.status.parse().unwrap_or_default(),
            featured: model.featured,
            image_url: model.image_url,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        (comic, owner)
    }
}
