//! Moderator entity <- model mapper

use modpanel_core::entities::Moderator;

use crate::models::ModeratorModel;

/// Drops the password hash; it is only read through `get_password_hash`
impl From<ModeratorModel> for Moderator {
    fn from(model: ModeratorModel) -> Self {
        Moderator {
            id: model.id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}
