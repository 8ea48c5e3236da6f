//! PostgreSQL implementation of ActionLogRepository

use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::instrument;

use modpanel_core::entities::{ActionLog, NewActionLog};
use modpanel_core::traits::{ActionLogRepository, RepoResult};
use modpanel_core::value_objects::UserId;

use crate::models::ActionLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActionLogRepository
#[derive(Clone)]
pub struct PgActionLogRepository {
    pool: PgPool,
}

impl PgActionLogRepository {
    /// Create a new PgActionLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append an audit row through any executor (pool or open transaction)
pub(crate) async fn insert_action_log<'e, E>(executor: E, entry: &NewActionLog) -> RepoResult<i64>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO action_logs (user_id, action, moderator, details)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        ",
    )
    .bind(entry.user_id.into_inner())
    .bind(entry.action.as_str())
    .bind(&entry.moderator)
    .bind(&entry.details)
    .fetch_one(executor)
    .await
    .map_err(map_db_error)
}

#[async_trait]
impl ActionLogRepository for PgActionLogRepository {
    #[instrument(skip(self))]
    async fn append(&self, entry: &NewActionLog) -> RepoResult<i64> {
        insert_action_log(&self.pool, entry).await
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<ActionLog>> {
        let results = sqlx::query_as::<_, ActionLogModel>(
            r"
            SELECT id, user_id, action, moderator, details, timestamp
            FROM action_logs
            ORDER BY id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ActionLog::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<ActionLog>> {
        let results = sqlx::query_as::<_, ActionLogModel>(
            r"
            SELECT id, user_id, action, moderator, details, timestamp
            FROM action_logs
            WHERE user_id = $1
            ORDER BY id DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ActionLog::from).collect())
    }
}
