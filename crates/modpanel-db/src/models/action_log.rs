//! Action log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for action_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ActionLogModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub moderator: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}
