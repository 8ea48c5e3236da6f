//! Route definitions
//!
//! Game server and moderator routes share the `/api/moderacao` prefix;
//! each handler's extractors decide which credential it accepts.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, game, health, moderation};
use crate::state::AppState;

/// Prefix shared by the game server and moderator endpoints
pub const MODERATION_PREFIX: &str = "/api/moderacao";

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .nest(MODERATION_PREFIX, game_routes().merge(moderator_routes()))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Moderator login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}

/// Routes called by the game server (`X-API-Key`)
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/updatePlayers", post(game::update_players))
        .route("/pendingCommands", get(game::pending_commands))
        .route("/checkBan/:user_id", get(game::check_ban))
}

/// Routes called by the moderation panel (bearer token)
fn moderator_routes() -> Router<AppState> {
    Router::new()
        .route("/executeAction", post(moderation::execute_action))
        .route("/unban", post(moderation::unban))
        .route("/players", get(moderation::list_players))
        .route("/bans", get(moderation::list_bans))
        .route("/logs", get(moderation::list_logs))
        .route("/logs/:user_id", get(moderation::user_logs))
}
