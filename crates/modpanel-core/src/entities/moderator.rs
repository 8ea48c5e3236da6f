//! Moderator entity - human operator allowed to issue actions

use chrono::{DateTime, Utc};

/// Moderator account (password hash is kept out of the entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moderator {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
