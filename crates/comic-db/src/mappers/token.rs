//! Access token entity <-> model mapper

use comic_core::entities::AccessToken;

use crate::models::AccessTokenModel;

/// Convert AccessTokenModel to AccessToken entity
impl From<AccessTokenModel> for AccessToken {
    fn from(model: AccessTokenModel) -> Self {
        AccessToken {
            id: model.id,
            user_id: model.user_id,
            token: model.token,
            created_at: model.created_at,
        }
    }
}
