//! Action log entity - append-only audit trail

use chrono::{DateTime, Utc};

use crate::value_objects::{AuditAction, UserId};

/// Stored audit entry
///
/// `action` stays a plain string so entries written by older tooling still load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLog {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub moderator: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// Audit entry about to be appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActionLog {
    pub user_id: UserId,
    pub action: AuditAction,
    pub moderator: String,
    pub details: String,
}

impl NewActionLog {
    pub fn unban(user_id: UserId, moderator: impl Into<String>) -> Self {
        Self {
            user_id,
            action: AuditAction::Unban,
            moderator: moderator.into(),
            details: "Ban removido".to_string(),
        }
    }
}
