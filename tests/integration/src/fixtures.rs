//! Test fixtures and wire types
//!
//! Mirrors the JSON the game server and the panel exchange with the API.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::helpers::{TEST_MODERATOR, TEST_PASSWORD};

/// Random player id, far above anything the fixtures of other suites use
pub fn unique_user_id() -> i64 {
    rand::thread_rng().gen_range(1_000_000_000..9_000_000_000)
}

// ============================================================================
// Moderator side
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn test_moderator() -> Self {
        Self {
            username: TEST_MODERATOR.to_string(),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct ExecuteActionRequest {
    pub user_id: i64,
    pub action: String,
    pub reason: Option<String>,
}

impl ExecuteActionRequest {
    pub fn kick(user_id: i64, reason: &str) -> Self {
        Self {
            user_id,
            action: "Kick".to_string(),
            reason: Some(reason.to_string()),
        }
    }

    pub fn ban(user_id: i64, reason: &str) -> Self {
        Self {
            user_id,
            action: "Ban".to_string(),
            reason: Some(reason.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnbanRequest {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BanView {
    pub user_id: i64,
    pub reason: Option<String>,
    pub banned_by: String,
}

#[derive(Debug, Deserialize)]
pub struct ActionLogView {
    pub user_id: Option<i64>,
    pub action: String,
    pub moderator: String,
    pub details: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerView {
    pub user_id: i64,
    pub name: String,
}

// ============================================================================
// Game server side
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerPayload {
    pub user_id: i64,
    pub name: String,
}

impl PlayerPayload {
    pub fn new(user_id: i64, name: &str) -> Self {
        Self {
            user_id,
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RosterUpdateResponse {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandDelivery {
    pub user_id: i64,
    pub action: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct BanStatus {
    pub banned: bool,
    pub reason: Option<String>,
    pub banned_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}
