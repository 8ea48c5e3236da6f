//! PostgreSQL implementation of RosterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modpanel_core::entities::{ActivePlayer, RosterEntry};
use modpanel_core::traits::{RepoResult, RosterRepository};

use crate::models::ActivePlayerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RosterRepository
#[derive(Clone)]
pub struct PgRosterRepository {
    pool: PgPool,
}

impl PgRosterRepository {
    /// Create a new PgRosterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterRepository for PgRosterRepository {
    #[instrument(skip(self, players), fields(count = players.len()))]
    async fn replace(&self, players: &[RosterEntry]) -> RepoResult<u64> {
        let players = RosterEntry::dedup_last_wins(players);
        let (ids, names): (Vec<i64>, Vec<String>) = players
            .into_iter()
            .map(|p| (p.user_id.into_inner(), p.name))
            .unzip();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM active_players")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            INSERT INTO active_players (user_id, name, last_seen)
            SELECT p.user_id, p.name, NOW()
            FROM UNNEST($1::BIGINT[], $2::TEXT[]) AS p(user_id, name)
            ",
        )
        .bind(ids)
        .bind(names)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ActivePlayer>> {
        let results = sqlx::query_as::<_, ActivePlayerModel>(
            r"
            SELECT user_id, name, last_seen
            FROM active_players
            ORDER BY name, user_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ActivePlayer::try_from).collect()
    }
}
