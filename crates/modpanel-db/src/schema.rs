//! Table definitions, created at startup
//!
//! Every statement is idempotent. There is no schema versioning.

use sqlx::PgPool;
use tracing::info;

const STATEMENTS: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS moderators (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS active_players (
        user_id BIGINT PRIMARY KEY,
        name TEXT NOT NULL,
        last_seen TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS pending_commands (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT NOT NULL CHECK (user_id > 0),
        action TEXT NOT NULL CHECK (action IN ('Kick', 'Ban')),
        reason TEXT,
        moderator TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        processed BOOLEAN NOT NULL DEFAULT FALSE
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_pending_commands_unprocessed
        ON pending_commands (id) WHERE processed = FALSE
    ",
    r"
    CREATE TABLE IF NOT EXISTS bans (
        user_id BIGINT PRIMARY KEY,
        username TEXT,
        reason TEXT,
        banned_by TEXT NOT NULL,
        banned_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS action_logs (
        id BIGSERIAL PRIMARY KEY,
        user_id BIGINT,
        action TEXT NOT NULL,
        moderator TEXT NOT NULL,
        details TEXT NOT NULL DEFAULT '',
        timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    ",
    r"
    CREATE INDEX IF NOT EXISTS idx_action_logs_user
        ON action_logs (user_id, id DESC)
    ",
];

/// Create any missing tables and indexes in one transaction
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!(statements = STATEMENTS.len(), "Database schema ready");
    Ok(())
}
