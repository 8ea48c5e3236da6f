//! PostgreSQL implementation of CommandQueueRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, info, instrument};

use modpanel_core::entities::{NewBan, NewCommand, PendingCommand};
use modpanel_core::traits::{CommandQueueRepository, RepoResult};
use modpanel_core::value_objects::CommandId;

use crate::models::PendingCommandModel;

use super::action_log::insert_action_log;
use super::ban::upsert_ban;
use super::error::map_db_error;

/// PostgreSQL implementation of CommandQueueRepository
#[derive(Clone)]
pub struct PgCommandQueueRepository {
    pool: PgPool,
}

impl PgCommandQueueRepository {
    /// Create a new PgCommandQueueRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_command(conn: &mut PgConnection, command: &NewCommand) -> RepoResult<CommandId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO pending_commands (user_id, action, reason, moderator)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(command.user_id.into_inner())
        .bind(command.action.as_str())
        .bind(&command.reason)
        .bind(&command.moderator)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_db_error)?;

        insert_action_log(&mut *conn, &command.audit_entry()).await?;

        Ok(CommandId::new(id))
    }
}

#[async_trait]
impl CommandQueueRepository for PgCommandQueueRepository {
    #[instrument(skip(self))]
    async fn enqueue(&self, command: &NewCommand) -> RepoResult<CommandId> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = Self::insert_command(&mut *tx, command).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn enqueue_ban(&self, command: &NewCommand, ban: &NewBan) -> RepoResult<CommandId> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = Self::insert_command(&mut *tx, command).await?;
        upsert_ban(&mut *tx, ban).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn drain(&self) -> RepoResult<Vec<PendingCommand>> {
        // One statement claims and returns the rows. SKIP LOCKED keeps
        // concurrent pollers from blocking on, or double-claiming, each other's rows.
        let results = sqlx::query_as::<_, PendingCommandModel>(
            r"
            WITH claimed AS (
                UPDATE pending_commands
                SET processed = TRUE
                WHERE id IN (
                    SELECT id FROM pending_commands
                    WHERE processed = FALSE
                    ORDER BY id
                    FOR UPDATE SKIP LOCKED
                )
                RETURNING id, user_id, action, reason, moderator, created_at, processed
            )
            SELECT id, user_id, action, reason, moderator, created_at, processed
            FROM claimed
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if results.is_empty() {
            debug!("No pending commands");
        } else {
            info!(count = results.len(), "Commands claimed");
        }

        results.into_iter().map(PendingCommand::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommandId) -> RepoResult<Option<PendingCommand>> {
        let result = sqlx::query_as::<_, PendingCommandModel>(
            r"
            SELECT id, user_id, action, reason, moderator, created_at, processed
            FROM pending_commands
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PendingCommand::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn pending_count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM pending_commands WHERE processed = FALSE
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
