//! Ban entity - one row per banned player

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Active ban (at most one per user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ban {
    pub user_id: UserId,
    pub username: Option<String>,
    pub reason: Option<String>,
    pub banned_by: String,
    pub banned_at: DateTime<Utc>,
}

/// Ban about to be upserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBan {
    pub user_id: UserId,
    pub username: Option<String>,
    pub reason: Option<String>,
    pub banned_by: String,
}

impl NewBan {
    pub fn new(user_id: UserId, reason: Option<String>, banned_by: impl Into<String>) -> Self {
        Self {
            user_id,
            username: None,
            reason,
            banned_by: banned_by.into(),
        }
    }

    /// Attach the player's display name, when known
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }
}
