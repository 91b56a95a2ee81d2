//! Entity -> DTO mappers

use comic_core::entities::{CatalogStats, Category, Comic, User, UserWithComicCount};

use super::responses::{
    AdminUserResponse, CategoryResponse, ComicResponse, CurrentUserResponse, OwnerSummary,
    StatsResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for OwnerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

impl From<&Comic> for ComicResponse {
    fn from(comic: &Comic) -> Self {
        Self {
            id: comic.id,
            title: comic.title.clone(),
            description: comic.description.clone(),
            author: comic.author.clone(),
            genre: comic.genre.clone(),
            category_id: comic.category_id,
            price: comic.price.to_string(),
            status: comic.status.as_str().to_string(),
            featured: comic.featured,
            image_url: comic.image_url.clone(),
            user_id: comic.user_id,
            owner: None,
            created_at: comic.created_at,
            updated_at: comic.updated_at,
        }
    }
}

impl ComicResponse {
    /// Build a response with the owner embedded
    #[must_use]
    pub fn with_owner(comic: &Comic, owner: &User) -> Self {
        let mut response = Self::from(comic);
        response.owner = Some(OwnerSummary::from(owner));
        response
    }
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            color: category.color.clone(),
        }
    }
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_comics: stats.total_comics,
            total_users: stats.total_users,
            published_comics: stats.published_comics,
        }
    }
}

impl From<&UserWithComicCount> for AdminUserResponse {
    fn from(entry: &UserWithComicCount) -> Self {
        Self {
            id: entry.user.id,
            name: entry.user.name.clone(),
            email: entry.user.email.clone(),
            is_admin: entry.user.is_admin,
            comics_count: entry.comics_count,
            created_at: entry.user.created_at,
        }
    }
}
