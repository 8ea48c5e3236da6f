//! Database models - SQLx-compatible structs for PostgreSQL tables

mod action_log;
mod ban;
mod command;
mod moderator;
mod player;

pub use action_log::ActionLogModel;
pub use ban::BanModel;
pub use command::PendingCommandModel;
pub use moderator::ModeratorModel;
pub use player::ActivePlayerModel;
