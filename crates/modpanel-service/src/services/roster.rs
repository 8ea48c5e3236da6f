//! Active-player snapshot service
//!
//! The roster is advisory; nothing else reads it when deciding on an action.

use tracing::{debug, instrument};

use modpanel_core::entities::RosterEntry;
use modpanel_core::value_objects::UserId;

use crate::dto::{PlayerPayload, PlayerResponse, RosterUpdateResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Replace the roster with the pushed snapshot
    ///
    /// Entries without a positive `UserId` or without a `Name` are skipped.
    /// The reported count is the number of entries received.
    #[instrument(skip(self, players), fields(received = players.len()))]
    pub async fn replace(&self, players: Vec<PlayerPayload>) -> ServiceResult<RosterUpdateResponse> {
        let received = players.len();

        let entries: Vec<RosterEntry> = players
            .into_iter()
            .filter_map(|p| {
                let user_id = UserId::new(p.user_id?).ok()?;
                Some(RosterEntry::new(user_id, p.name?))
            })
            .collect();

        let written = self.ctx.roster_repo().replace(&entries).await?;
        debug!(received, written, "Roster replaced");

        Ok(RosterUpdateResponse::success(received))
    }

    /// Current roster ordered by name
    pub async fn list(&self) -> ServiceResult<Vec<PlayerResponse>> {
        let players = self.ctx.roster_repo().list().await?;
        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }
}
