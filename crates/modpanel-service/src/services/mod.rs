//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and owns one use case
//! area. Services validate input, call repositories, and log outcomes.

pub mod audit;
pub mod auth;
pub mod ban;
pub mod command_queue;
pub mod context;
pub mod error;
pub mod moderation;
pub mod roster;

#[cfg(test)]
pub(crate) mod test_support;

pub use audit::AuditService;
pub use auth::AuthService;
pub use ban::BanService;
pub use command_queue::CommandQueueService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
pub use roster::RosterService;
