//! Authentication handlers

use axum::{extract::State, Json};
use modpanel_service::dto::{LoginRequest, LoginResponse};
use modpanel_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Exchange moderator credentials for an access token
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
