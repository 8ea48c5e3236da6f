//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Methods that touch more than one table are
//! expected to commit all of their writes or none of them.

use async_trait::async_trait;

use crate::entities::{
    ActionLog, ActivePlayer, Ban, Moderator, NewActionLog, NewBan, NewCommand, PendingCommand,
    RosterEntry,
};
use crate::error::DomainError;
use crate::value_objects::{CommandId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Command Queue
// ============================================================================

#[async_trait]
pub trait CommandQueueRepository: Send + Sync {
    /// Append an unprocessed command and its audit entry in one transaction
    async fn enqueue(&self, command: &NewCommand) -> RepoResult<CommandId>;

    /// Append a command, upsert the ban and write the audit entry in one transaction
    async fn enqueue_ban(&self, command: &NewCommand, ban: &NewBan) -> RepoResult<CommandId>;

    /// Claim every unprocessed command, oldest first.
    ///
    /// Claimed rows are marked processed by the same atomic operation, so two
    /// concurrent callers never receive the same command.
    async fn drain(&self) -> RepoResult<Vec<PendingCommand>>;

    /// Find a command by id regardless of its processed flag
    async fn find_by_id(&self, id: CommandId) -> RepoResult<Option<PendingCommand>>;

    /// Number of commands still waiting for a poller
    async fn pending_count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Ban Registry
// ============================================================================

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Insert or replace the ban for `ban.user_id` (last write wins)
    async fn upsert(&self, ban: &NewBan) -> RepoResult<()>;

    /// Delete the ban if present and append an "Unban" audit entry.
    ///
    /// Returns whether a ban row was actually removed.
    async fn remove(&self, user_id: UserId, moderator: &str) -> RepoResult<bool>;

    /// Look up the ban for a user
    async fn find(&self, user_id: UserId) -> RepoResult<Option<Ban>>;

    /// List all bans, newest first
    async fn list(&self) -> RepoResult<Vec<Ban>>;
}

// ============================================================================
// Action Log
// ============================================================================

#[async_trait]
pub trait ActionLogRepository: Send + Sync {
    /// Append an audit entry, returning its id
    async fn append(&self, entry: &NewActionLog) -> RepoResult<i64>;

    /// Most recent entries, newest first
    async fn recent(&self, limit: i64) -> RepoResult<Vec<ActionLog>>;

    /// Most recent entries for one user, newest first
    async fn find_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<ActionLog>>;
}

// ============================================================================
// Active-Player Snapshot
// ============================================================================

#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Replace the whole roster, returning the number of rows written
    async fn replace(&self, players: &[RosterEntry]) -> RepoResult<u64>;

    /// Current roster ordered by name
    async fn list(&self) -> RepoResult<Vec<ActivePlayer>>;
}

// ============================================================================
// Moderators
// ============================================================================

#[async_trait]
pub trait ModeratorRepository: Send + Sync {
    /// Find moderator by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Moderator>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;

    /// Create a moderator account
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<Moderator>;

    /// Number of moderator accounts
    async fn count(&self) -> RepoResult<i64>;
}
