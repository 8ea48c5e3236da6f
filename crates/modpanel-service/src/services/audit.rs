//! Audit trail queries

use modpanel_core::value_objects::UserId;

use crate::dto::ActionLogResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default number of entries returned
pub const DEFAULT_LOG_LIMIT: i64 = 50;
/// Upper bound for a single request
pub const MAX_LOG_LIMIT: i64 = 200;

pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest entries first
    pub async fn recent(&self, limit: Option<i64>) -> ServiceResult<Vec<ActionLogResponse>> {
        let entries = self.ctx.action_log_repo().recent(clamp_limit(limit)).await?;
        Ok(entries.into_iter().map(ActionLogResponse::from).collect())
    }

    /// Newest entries first for one player
    pub async fn for_user(&self, user_id: i64, limit: Option<i64>) -> ServiceResult<Vec<ActionLogResponse>> {
        let user_id = UserId::new(user_id)?;
        let entries = self
            .ctx
            .action_log_repo()
            .find_by_user(user_id, clamp_limit(limit))
            .await?;
        Ok(entries.into_iter().map(ActionLogResponse::from).collect())
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LOG_LIMIT).clamp(1, MAX_LOG_LIMIT)
}
