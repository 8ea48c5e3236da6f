//! Domain entities - core business objects

mod action_log;
mod ban;
mod command;
mod moderator;
mod player;

pub use action_log::{ActionLog, NewActionLog};
pub use ban::{Ban, NewBan};
pub use command::{NewCommand, PendingCommand};
pub use moderator::Moderator;
pub use player::{ActivePlayer, RosterEntry};
