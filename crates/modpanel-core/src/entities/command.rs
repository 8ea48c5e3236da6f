//! Pending command entity - a moderator action waiting for the game server

use chrono::{DateTime, Utc};

use crate::entities::NewActionLog;
use crate::value_objects::{CommandId, ModerationAction, UserId};

/// Command queued for delivery to the game server
///
/// Rows are never deleted; the only mutation is `processed` flipping to true
/// when a poller claims the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommand {
    pub id: CommandId,
    pub user_id: UserId,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub moderator: String,
    pub created_at: DateTime<Utc>,
    pub processed: bool,
}

impl PendingCommand {
    /// Reason sent to the game server, synthesized when the moderator left it blank
    pub fn delivery_reason(&self) -> String {
        match self.reason.as_deref() {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => format!("{} por {}", self.action, self.moderator),
        }
    }
}

/// Command about to be enqueued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommand {
    pub user_id: UserId,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub moderator: String,
}

impl NewCommand {
    pub fn new(
        user_id: UserId,
        action: ModerationAction,
        reason: Option<String>,
        moderator: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            action,
            reason: reason.filter(|r| !r.is_empty()),
            moderator: moderator.into(),
        }
    }

    /// Audit entry written alongside the command
    pub fn audit_entry(&self) -> NewActionLog {
        NewActionLog {
            user_id: self.user_id,
            action: self.action.into(),
            moderator: self.moderator.clone(),
            details: self.reason.clone().unwrap_or_default(),
        }
    }
}
