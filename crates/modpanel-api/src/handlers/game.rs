//! Game server handlers
//!
//! Endpoints polled by the game server. Every handler takes `GameServer`
//! first so the API key is checked before the body is read.

use axum::{extract::State, Json};
use modpanel_service::dto::{BanStatusResponse, CommandDelivery, PlayerPayload, RosterUpdateResponse};
use modpanel_service::{BanService, CommandQueueService, RosterService};

use crate::extractors::{GameServer, JsonBody, UserIdPath, ValidPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Replace the active-player roster
///
/// POST /api/moderacao/updatePlayers
pub async fn update_players(
    _game: GameServer,
    State(state): State<AppState>,
    JsonBody(players): JsonBody<Vec<PlayerPayload>>,
) -> ApiResult<Json<RosterUpdateResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.replace(players).await?;
    Ok(Json(response))
}

/// Claim every command queued since the last poll
///
/// GET /api/moderacao/pendingCommands
pub async fn pending_commands(
    _game: GameServer,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CommandDelivery>>> {
    let service = CommandQueueService::new(state.service_context());
    let commands = service.drain().await?;
    Ok(Json(commands))
}

/// Ban status for one player
///
/// GET /api/moderacao/checkBan/:user_id
pub async fn check_ban(
    _game: GameServer,
    State(state): State<AppState>,
    ValidPath(path): ValidPath<UserIdPath>,
) -> ApiResult<Json<BanStatusResponse>> {
    let user_id = path.user_id()?;
    let service = BanService::new(state.service_context());
    let status = service.check(user_id).await?;
    Ok(Json(status))
}
