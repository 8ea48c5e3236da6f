//! ActionLog entity <- model mapper

use modpanel_core::entities::ActionLog;

use crate::models::ActionLogModel;

impl From<ActionLogModel> for ActionLog {
    fn from(model: ActionLogModel) -> Self {
        ActionLog {
            id: model.id,
            user_id: model.user_id,
            action: model.action,
            moderator: model.moderator,
            details: model.details,
            timestamp: model.timestamp,
        }
    }
}
