//! Pending command database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for pending_commands table
#[derive(Debug, Clone, FromRow)]
pub struct PendingCommandModel {
    pub id: i64,
    pub user_id: i64,
    pub action: String,
    pub reason: Option<String>,
    pub moderator: String,
    pub created_at: DateTime<Utc>,
    pub processed: bool,
}
