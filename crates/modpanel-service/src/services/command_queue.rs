//! Command queue service
//!
//! Producer side: moderators enqueue Kick/Ban commands. Consumer side: the game
//! server drains them. Each command is delivered to exactly one drain call.

use tracing::{error, info, instrument};

use modpanel_core::entities::NewCommand;
use modpanel_core::value_objects::{CommandId, ModerationAction, UserId};

use crate::dto::CommandDelivery;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Command queue service
pub struct CommandQueueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommandQueueService<'a> {
    /// Create a new CommandQueueService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and append a command together with its audit entry
    ///
    /// # Errors
    /// `InvalidUserId` / `InvalidAction` for bad input, a store failure otherwise
    #[instrument(skip(self, reason))]
    pub async fn enqueue(
        &self,
        user_id: i64,
        action: &str,
        reason: Option<String>,
        moderator: &str,
    ) -> ServiceResult<CommandId> {
        let command = parse_command(user_id, action, reason, moderator)?;

        let id = self.ctx.command_repo().enqueue(&command).await.map_err(|e| {
            error!(user_id, action, moderator, error = %e, "Failed to enqueue command");
            e
        })?;

        info!(command_id = %id, user_id, action, moderator, "Command enqueued");
        Ok(id)
    }

    /// Claim every pending command, oldest first
    ///
    /// # Errors
    /// Returns a store failure; nothing is claimed in that case
    #[instrument(skip(self))]
    pub async fn drain(&self) -> ServiceResult<Vec<CommandDelivery>> {
        let commands = self.ctx.command_repo().drain().await.map_err(|e| {
            error!(error = %e, "Failed to drain pending commands");
            e
        })?;

        if !commands.is_empty() {
            info!(count = commands.len(), "Pending commands delivered");
        }

        Ok(commands.iter().map(CommandDelivery::from).collect())
    }

    /// Number of commands no poller has claimed yet
    pub async fn pending_count(&self) -> ServiceResult<i64> {
        Ok(self.ctx.command_repo().pending_count().await?)
    }
}

/// Shared input validation for every path that creates a command
pub(crate) fn parse_command(
    user_id: i64,
    action: &str,
    reason: Option<String>,
    moderator: &str,
) -> ServiceResult<NewCommand> {
    let user_id = UserId::new(user_id)?;
    let action: ModerationAction = action.parse()?;
    Ok(NewCommand::new(user_id, action, reason, moderator))
}
