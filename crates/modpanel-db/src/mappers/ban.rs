//! Ban entity <- model mapper

use modpanel_core::entities::Ban;
use modpanel_core::error::DomainError;
use modpanel_core::value_objects::UserId;

use crate::models::BanModel;

impl TryFrom<BanModel> for Ban {
    type Error = DomainError;

    fn try_from(model: BanModel) -> Result<Self, Self::Error> {
        Ok(Ban {
            user_id: UserId::new(model.user_id)?,
            username: model.username,
            reason: model.reason,
            banned_by: model.banned_by,
            banned_at: model.banned_at,
        })
    }
}
