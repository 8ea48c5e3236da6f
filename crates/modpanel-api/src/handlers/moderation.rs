//! Moderator handlers
//!
//! Endpoints used by the moderation panel. All of them require a bearer
//! token; the token subject is recorded as the acting moderator.

use axum::{extract::State, Json};
use modpanel_service::dto::{
    ActionLogResponse, BanResponse, ExecuteActionRequest, PlayerResponse, RecentLogsQuery,
    StatusResponse, UnbanRequest,
};
use modpanel_service::{AuditService, BanService, ModerationService, RosterService};

use crate::extractors::{ModeratorAuth, UserIdPath, ValidPath, ValidQuery, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Queue a Kick or Ban
///
/// POST /api/moderacao/executeAction
pub async fn execute_action(
    moderator: ModeratorAuth,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ExecuteActionRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.execute_action(request, &moderator.username).await?;
    Ok(Json(response))
}

/// Lift a ban
///
/// POST /api/moderacao/unban
pub async fn unban(
    moderator: ModeratorAuth,
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UnbanRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let service = BanService::new(state.service_context());
    let response = service.unban(request.user_id, &moderator.username).await?;
    Ok(Json(response))
}

/// Players the game server last reported online
///
/// GET /api/moderacao/players
pub async fn list_players(
    _moderator: ModeratorAuth,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PlayerResponse>>> {
    let service = RosterService::new(state.service_context());
    let players = service.list().await?;
    Ok(Json(players))
}

/// All active bans, newest first
///
/// GET /api/moderacao/bans
pub async fn list_bans(
    _moderator: ModeratorAuth,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BanResponse>>> {
    let service = BanService::new(state.service_context());
    let bans = service.list().await?;
    Ok(Json(bans))
}

/// Recent audit entries
///
/// GET /api/moderacao/logs?limit=N
pub async fn list_logs(
    _moderator: ModeratorAuth,
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<RecentLogsQuery>,
) -> ApiResult<Json<Vec<ActionLogResponse>>> {
    let service = AuditService::new(state.service_context());
    let logs = service.recent(query.limit).await?;
    Ok(Json(logs))
}

/// Audit entries for one player
///
/// GET /api/moderacao/logs/:user_id?limit=N
pub async fn user_logs(
    _moderator: ModeratorAuth,
    State(state): State<AppState>,
    ValidPath(path): ValidPath<UserIdPath>,
    ValidQuery(query): ValidQuery<RecentLogsQuery>,
) -> ApiResult<Json<Vec<ActionLogResponse>>> {
    let user_id = path.user_id()?;
    let service = AuditService::new(state.service_context());
    let logs = service.for_user(user_id, query.limit).await?;
    Ok(Json(logs))
}
