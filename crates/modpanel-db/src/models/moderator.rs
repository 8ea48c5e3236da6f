//! Moderator database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for moderators table
#[derive(Debug, Clone, FromRow)]
pub struct ModeratorModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
