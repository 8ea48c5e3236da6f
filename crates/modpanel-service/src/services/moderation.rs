//! Moderator actions
//!
//! A Kick is one queued command. A Ban is a queued command plus a ban row,
//! committed together with the audit entry.

use tracing::{error, info, instrument};
use validator::Validate;

use modpanel_core::entities::NewBan;

use crate::dto::{ExecuteActionRequest, StatusResponse};

use super::command_queue::parse_command;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Queue the requested action on behalf of `moderator`
    ///
    /// # Errors
    /// 400-class errors for bad input (nothing is written), a store failure otherwise
    #[instrument(skip(self, request), fields(user_id = request.user_id, action = %request.action))]
    pub async fn execute_action(
        &self,
        request: ExecuteActionRequest,
        moderator: &str,
    ) -> ServiceResult<StatusResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        // The ban row keeps the reason exactly as typed, "" when none was given
        let ban_reason = request.reason.clone().unwrap_or_default();
        let command = parse_command(request.user_id, &request.action, request.reason, moderator)?;

        let result = if command.action.is_ban() {
            let ban = NewBan::new(command.user_id, Some(ban_reason), moderator);
            self.ctx.command_repo().enqueue_ban(&command, &ban).await
        } else {
            self.ctx.command_repo().enqueue(&command).await
        };

        let id = result.map_err(|e| {
            error!(
                user_id = %command.user_id,
                action = %command.action,
                moderator,
                error = %e,
                "Moderator action failed"
            );
            e
        })?;

        info!(
            command_id = %id,
            user_id = %command.user_id,
            action = %command.action,
            moderator,
            "Moderator action queued"
        );

        Ok(StatusResponse::success(format!(
            "Comando {} agendado para o UserID {}",
            command.action, command.user_id
        )))
    }
}
