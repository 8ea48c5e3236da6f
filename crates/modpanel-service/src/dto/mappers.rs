//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use modpanel_core::entities::{ActionLog, ActivePlayer, Ban, PendingCommand};

use super::responses::{
    ActionLogResponse, BanResponse, BanStatusResponse, CommandDelivery, PlayerResponse,
};

impl From<&PendingCommand> for CommandDelivery {
    fn from(command: &PendingCommand) -> Self {
        Self {
            user_id: command.user_id.into_inner(),
            action: command.action.to_string(),
            reason: command.delivery_reason(),
        }
    }
}

impl From<PendingCommand> for CommandDelivery {
    fn from(command: PendingCommand) -> Self {
        Self::from(&command)
    }
}

impl From<Option<Ban>> for BanStatusResponse {
    fn from(ban: Option<Ban>) -> Self {
        match ban {
            Some(ban) => Self {
                banned: true,
                reason: ban.reason,
                banned_by: Some(ban.banned_by),
            },
            None => Self::not_banned(),
        }
    }
}

impl From<Ban> for BanResponse {
    fn from(ban: Ban) -> Self {
        Self {
            user_id: ban.user_id.into_inner(),
            username: ban.username,
            reason: ban.reason,
            banned_by: ban.banned_by,
            banned_at: ban.banned_at,
        }
    }
}

impl From<ActivePlayer> for PlayerResponse {
    fn from(player: ActivePlayer) -> Self {
        Self {
            user_id: player.user_id.into_inner(),
            name: player.name,
            last_seen: player.last_seen,
        }
    }
}

impl From<ActionLog> for ActionLogResponse {
    fn from(entry: ActionLog) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action,
            moderator: entry.moderator,
            details: entry.details,
            timestamp: entry.timestamp,
        }
    }
}
