//! # modpanel-core
//!
//! Domain layer for the moderation panel: the command queue, the ban registry,
//! the audit trail and the active-player snapshot.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActionLog, ActivePlayer, Ban, Moderator, NewActionLog, NewBan, NewCommand, PendingCommand,
    RosterEntry,
};
pub use error::DomainError;
pub use traits::{
    ActionLogRepository, BanRepository, CommandQueueRepository, ModeratorRepository, RepoResult,
    RosterRepository,
};
pub use value_objects::{AuditAction, CommandId, ModerationAction, UserId};
