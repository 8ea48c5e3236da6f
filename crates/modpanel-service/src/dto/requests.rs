//! Request DTOs for API endpoints
//!
//! Moderator request DTOs implement `Deserialize` and `Validate`.

use serde::Deserialize;
use validator::Validate;

use super::de;

// ============================================================================
// Auth Requests
// ============================================================================

/// Moderator login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Queue a Kick or Ban for a player
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExecuteActionRequest {
    #[serde(deserialize_with = "de::user_id")]
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,

    /// "Kick" or "Ban", exact case
    pub action: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

/// Lift the ban on a player
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UnbanRequest {
    #[serde(deserialize_with = "de::user_id")]
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,
}

/// `?limit=` for the action log listing
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RecentLogsQuery {
    pub limit: Option<i64>,
}

// ============================================================================
// Game Server Payloads
// ============================================================================

/// One roster entry pushed by the game server
///
/// Both fields are optional on the wire; incomplete entries are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerPayload {
    #[serde(rename = "UserId", default, deserialize_with = "de::optional_user_id")]
    pub user_id: Option<i64>,

    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}
