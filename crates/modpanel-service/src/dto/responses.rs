//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// `{status, message}` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Game Server Responses
// ============================================================================

/// Acknowledgement for a roster push; `count` is the number of entries received
#[derive(Debug, Clone, Serialize)]
pub struct RosterUpdateResponse {
    pub status: String,
    pub count: usize,
}

impl RosterUpdateResponse {
    pub fn success(count: usize) -> Self {
        Self {
            status: "success".to_string(),
            count,
        }
    }
}

/// Command handed to the game server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandDelivery {
    pub user_id: i64,
    pub action: String,
    pub reason: String,
}

/// Ban lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanStatusResponse {
    pub banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_by: Option<String>,
}

impl BanStatusResponse {
    pub fn not_banned() -> Self {
        Self {
            banned: false,
            reason: None,
            banned_by: None,
        }
    }
}

// ============================================================================
// Moderator Responses
// ============================================================================

/// Issued moderator session
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
}

/// Ban registry row
#[derive(Debug, Clone, Serialize)]
pub struct BanResponse {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub banned_by: String,
    pub banned_at: DateTime<Utc>,
}

/// Online player, in the same key style the game server pushes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerResponse {
    pub user_id: i64,
    pub name: String,
    pub last_seen: DateTime<Utc>,
}

/// Audit trail entry
#[derive(Debug, Clone, Serialize)]
pub struct ActionLogResponse {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub moderator: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
