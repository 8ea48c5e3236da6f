//! Authentication extractors
//!
//! `GameServer` checks the shared `X-API-Key` header, `ModeratorAuth` checks
//! a bearer token issued by `/auth/login`. Both reject with 401 before the
//! handler body runs, so a rejected request never reaches the store.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use modpanel_common::ApiKey;
use modpanel_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// A request carrying the game server's API key
#[derive(Debug, Clone, Copy)]
pub struct GameServer;

#[async_trait]
impl<S> FromRequestParts<S> for GameServer
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let presented = parts
            .headers
            .get(ApiKey::HEADER)
            .and_then(|v| v.to_str().ok());

        AuthService::new(app_state.service_context()).verify_game_key(presented)?;

        Ok(GameServer)
    }
}

/// Moderator authenticated by bearer token
#[derive(Debug, Clone)]
pub struct ModeratorAuth {
    /// Username from the token subject
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for ModeratorAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let claims = AuthService::new(app_state.service_context()).authenticate(bearer.token())?;

        Ok(ModeratorAuth { username: claims.sub })
    }
}
