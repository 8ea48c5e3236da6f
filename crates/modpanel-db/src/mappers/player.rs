//! ActivePlayer entity <- model mapper

use modpanel_core::entities::ActivePlayer;
use modpanel_core::error::DomainError;
use modpanel_core::value_objects::UserId;

use crate::models::ActivePlayerModel;

impl TryFrom<ActivePlayerModel> for ActivePlayer {
    type Error = DomainError;

    fn try_from(model: ActivePlayerModel) -> Result<Self, Self::Error> {
        Ok(ActivePlayer {
            user_id: UserId::new(model.user_id)?,
            name: model.name,
            last_seen: model.last_seen,
        })
    }
}
