//! PendingCommand entity <- model mapper

use modpanel_core::entities::PendingCommand;
use modpanel_core::error::DomainError;
use modpanel_core::value_objects::{CommandId, UserId};

use crate::models::PendingCommandModel;

impl TryFrom<PendingCommandModel> for PendingCommand {
    type Error = DomainError;

    fn try_from(model: PendingCommandModel) -> Result<Self, Self::Error> {
        Ok(PendingCommand {
            id: CommandId::new(model.id),
            user_id: UserId::new(model.user_id)?,
            action: model.action.parse()?,
            reason: model.reason,
            moderator: model.moderator,
            created_at: model.created_at,
            processed: model.processed,
        })
    }
}
