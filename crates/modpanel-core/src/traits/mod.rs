//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActionLogRepository, BanRepository, CommandQueueRepository, ModeratorRepository, RepoResult,
    RosterRepository,
};
