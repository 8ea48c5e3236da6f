//! PostgreSQL implementation of BanRepository

use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::{info, instrument};

use modpanel_core::entities::{Ban, NewActionLog, NewBan};
use modpanel_core::traits::{BanRepository, RepoResult};
use modpanel_core::value_objects::UserId;

use crate::models::BanModel;

use super::action_log::insert_action_log;
use super::error::map_db_error;

/// PostgreSQL implementation of BanRepository
#[derive(Clone)]
pub struct PgBanRepository {
    pool: PgPool,
}

impl PgBanRepository {
    /// Create a new PgBanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert or replace a ban. A known username is never overwritten with NULL.
pub(crate) async fn upsert_ban<'e, E>(executor: E, ban: &NewBan) -> RepoResult<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r"
        INSERT INTO bans (user_id, username, reason, banned_by, banned_at)
        VALUES ($1, $2, $3, $4, NOW())
        ON CONFLICT (user_id) DO UPDATE
        SET username = COALESCE(EXCLUDED.username, bans.username),
            reason = EXCLUDED.reason,
            banned_by = EXCLUDED.banned_by,
            banned_at = EXCLUDED.banned_at
        ",
    )
    .bind(ban.user_id.into_inner())
    .bind(&ban.username)
    .bind(&ban.reason)
    .bind(&ban.banned_by)
    .execute(executor)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

#[async_trait]
impl BanRepository for PgBanRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, ban: &NewBan) -> RepoResult<()> {
        upsert_ban(&self.pool, ban).await
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: UserId, moderator: &str) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM bans WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        insert_action_log(&mut *tx, &NewActionLog::unban(user_id, moderator)).await?;

        tx.commit().await.map_err(map_db_error)?;

        let removed = result.rows_affected() > 0;
        info!(user_id = %user_id, moderator, removed, "Ban removed");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: UserId) -> RepoResult<Option<Ban>> {
        let result = sqlx::query_as::<_, BanModel>(
            r"
            SELECT user_id, username, reason, banned_by, banned_at
            FROM bans
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Ban::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Ban>> {
        let results = sqlx::query_as::<_, BanModel>(
            r"
            SELECT user_id, username, reason, banned_by, banned_at
            FROM bans
            ORDER BY banned_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Ban::try_from).collect()
    }
}
