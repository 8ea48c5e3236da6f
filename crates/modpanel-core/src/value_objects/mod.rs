//! Value objects - immutable types that represent domain concepts

mod action;
mod ids;

pub use action::{AuditAction, ModerationAction};
pub use ids::{CommandId, UserId};
