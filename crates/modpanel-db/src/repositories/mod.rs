//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in modpanel-core.
//! Statements shared by several repositories live next to the table they write
//! and take any executor, so callers can run them inside their own transaction.

mod action_log;
mod ban;
mod command_queue;
mod error;
mod moderator;
mod roster;

pub use action_log::PgActionLogRepository;
pub use ban::PgBanRepository;
pub use command_queue::PgCommandQueueRepository;
pub use moderator::PgModeratorRepository;
pub use roster::PgRosterRepository;
