//! Category entity <-> model mapper

use comic_core::entities::Category;

use crate::models::CategoryModel;

/// Convert CategoryModel to Category entity
impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            color: model.color,
        }
    }
}
