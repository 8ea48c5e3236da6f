//! Ban database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bans table
#[derive(Debug, Clone, FromRow)]
pub struct BanModel {
    pub user_id: i64,
    pub username: Option<String>,
    pub reason: Option<String>,
    pub banned_by: String,
    pub banned_at: DateTime<Utc>,
}
