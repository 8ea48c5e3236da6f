//! Ban registry service

use tracing::{error, info, instrument, warn};

use modpanel_core::entities::NewBan;
use modpanel_core::value_objects::UserId;

use crate::dto::{BanResponse, BanStatusResponse, StatusResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ban registry service
pub struct BanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BanService<'a> {
    /// Create a new BanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Insert or replace a ban without queueing a command
    #[instrument(skip(self, reason))]
    pub async fn ban(&self, user_id: i64, reason: Option<String>, banned_by: &str) -> ServiceResult<()> {
        let user_id = UserId::new(user_id)?;
        let ban = NewBan::new(user_id, reason.filter(|r| !r.is_empty()), banned_by);

        self.ctx.ban_repo().upsert(&ban).await.map_err(|e| {
            error!(user_id = %user_id, banned_by, error = %e, "Failed to store ban");
            e
        })?;

        info!(user_id = %user_id, banned_by, "Ban stored");
        Ok(())
    }

    /// Lift a ban. Removing an absent ban is not an error; the audit entry is
    /// written either way.
    #[instrument(skip(self))]
    pub async fn unban(&self, user_id: i64, moderator: &str) -> ServiceResult<StatusResponse> {
        let user_id = UserId::new(user_id)?;

        let removed = self.ctx.ban_repo().remove(user_id, moderator).await.map_err(|e| {
            error!(user_id = %user_id, moderator, error = %e, "Failed to remove ban");
            e
        })?;

        if removed {
            info!(user_id = %user_id, moderator, "Ban removed");
        } else {
            warn!(user_id = %user_id, moderator, "Unban requested for a user who was not banned");
        }

        Ok(StatusResponse::success(format!(
            "Ban removido do UserID {user_id}"
        )))
    }

    /// Game-server lookup
    #[instrument(skip(self))]
    pub async fn check(&self, user_id: i64) -> ServiceResult<BanStatusResponse> {
        let user_id = UserId::new(user_id)?;
        let ban = self.ctx.ban_repo().find(user_id).await?;
        Ok(BanStatusResponse::from(ban))
    }

    /// All bans, newest first
    pub async fn list(&self) -> ServiceResult<Vec<BanResponse>> {
        let bans = self.ctx.ban_repo().list().await?;
        Ok(bans.into_iter().map(BanResponse::from).collect())
    }
}
