//! PostgreSQL implementation of ModeratorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modpanel_core::entities::Moderator;
use modpanel_core::error::DomainError;
use modpanel_core::traits::{ModeratorRepository, RepoResult};

use crate::models::ModeratorModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ModeratorRepository
#[derive(Clone)]
pub struct PgModeratorRepository {
    pool: PgPool,
}

impl PgModeratorRepository {
    /// Create a new PgModeratorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ModeratorRepository for PgModeratorRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Moderator>> {
        let result = sqlx::query_as::<_, ModeratorModel>(
            r"
            SELECT id, username, password_hash, created_at
            FROM moderators
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Moderator::from))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM moderators WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<Moderator> {
        let result = sqlx::query_as::<_, ModeratorModel>(
            r"
            INSERT INTO moderators (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            ",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ModeratorExists(username.to_string())))?;

        Ok(Moderator::from(result))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM moderators")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
