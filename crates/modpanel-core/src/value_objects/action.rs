//! Moderation actions
//!
//! `ModerationAction` is the closed set of commands a moderator can queue for the
//! game server. `AuditAction` adds the actions that only ever reach the audit log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Command delivered to the game server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModerationAction {
    Kick,
    Ban,
}

impl ModerationAction {
    /// Wire and storage representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "Kick",
            Self::Ban => "Ban",
        }
    }

    #[inline]
    pub const fn is_ban(&self) -> bool {
        matches!(self, Self::Ban)
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Exact match only: the game server switches on these strings.
impl FromStr for ModerationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kick" => Ok(Self::Kick),
            "Ban" => Ok(Self::Ban),
            other => Err(DomainError::InvalidAction(other.to_string())),
        }
    }
}

/// Action recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    Kick,
    Ban,
    Unban,
}

impl AuditAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "Kick",
            Self::Ban => "Ban",
            Self::Unban => "Unban",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ModerationAction> for AuditAction {
    fn from(action: ModerationAction) -> Self {
        match action {
            ModerationAction::Kick => Self::Kick,
            ModerationAction::Ban => Self::Ban,
        }
    }
}
