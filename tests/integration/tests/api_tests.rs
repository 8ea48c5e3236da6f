//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, shared_state_lock, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn drain(server: &TestServer) -> Vec<CommandDelivery> {
    let response = server
        .game_get("/api/moderacao/pendingCommands")
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

fn for_user(commands: &[CommandDelivery], user_id: i64) -> Vec<CommandDelivery> {
    commands
        .iter()
        .filter(|c| c.user_id == user_id)
        .cloned()
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/auth/login", &LoginRequest::test_moderator())
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!login.access_token.is_empty());
    assert_eq!(login.token_type, "Bearer");
    assert!(login.expires_in > 0);
    assert_eq!(login.username, "itest");
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = LoginRequest {
        username: "itest".to_string(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/auth/login", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(body.status, "error");
}

// ============================================================================
// Credential Checks
// ============================================================================

#[tokio::test]
async fn test_game_endpoints_require_api_key() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/moderacao/pendingCommands").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/moderacao/checkBan/42").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.status, "error");
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn test_rejected_moderator_action_writes_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user_id = unique_user_id();

    let response = server
        .post(
            "/api/moderacao/executeAction",
            &ExecuteActionRequest::ban(user_id, "no token"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post_auth(
            "/api/moderacao/executeAction",
            "not-a-token",
            &ExecuteActionRequest::ban(user_id, "bad token"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .game_get(&format!("/api/moderacao/checkBan/{user_id}"))
        .await
        .unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.banned);

    let token = server.login().await.unwrap();
    let response = server
        .get_auth(&format!("/api/moderacao/logs/{user_id}"), &token)
        .await
        .unwrap();
    let logs: Vec<ActionLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(logs.is_empty());
}

// ============================================================================
// Moderation Flow
// ============================================================================

#[tokio::test]
async fn test_ban_flow_end_to_end() {
    if !check_test_env() {
        return;
    }

    let _guard = shared_state_lock().await;
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let user_id = unique_user_id();

    let response = server
        .post_auth(
            "/api/moderacao/executeAction",
            &token,
            &ExecuteActionRequest::ban(user_id, "cheating"),
        )
        .await
        .unwrap();
    let ack: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.status, "success");
    assert!(ack.message.contains(&user_id.to_string()));

    // Registry
    let response = server
        .game_get(&format!("/api/moderacao/checkBan/{user_id}"))
        .await
        .unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.banned);
    assert_eq!(status.reason.as_deref(), Some("cheating"));
    assert_eq!(status.banned_by.as_deref(), Some("itest"));

    // Audit trail
    let response = server
        .get_auth(&format!("/api/moderacao/logs/{user_id}"), &token)
        .await
        .unwrap();
    let logs: Vec<ActionLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, "Ban");
    assert_eq!(logs[0].moderator, "itest");
    assert_eq!(logs[0].details, "cheating");
    assert_eq!(logs[0].user_id, Some(user_id));

    // Queue, delivered once
    let first = for_user(&drain(&server).await, user_id);
    assert_eq!(
        first,
        vec![CommandDelivery {
            user_id,
            action: "Ban".to_string(),
            reason: "cheating".to_string(),
        }]
    );
    assert!(for_user(&drain(&server).await, user_id).is_empty());

    // Ban list
    let response = server.get_auth("/api/moderacao/bans", &token).await.unwrap();
    let bans: Vec<BanView> = assert_json(response, StatusCode::OK).await.unwrap();
    let ban = bans.iter().find(|b| b.user_id == user_id).expect("ban listed");
    assert_eq!(ban.banned_by, "itest");
    assert_eq!(ban.reason.as_deref(), Some("cheating"));
}

#[tokio::test]
async fn test_kick_gets_default_reason_and_fifo_order() {
    if !check_test_env() {
        return;
    }

    let _guard = shared_state_lock().await;
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let user_id = unique_user_id();

    let no_reason = json!({ "user_id": user_id, "action": "Kick" });
    let response = server
        .post_auth("/api/moderacao/executeAction", &token, &no_reason)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/api/moderacao/executeAction",
            &token,
            &ExecuteActionRequest::kick(user_id, "second"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let commands = for_user(&drain(&server).await, user_id);
    let reasons: Vec<&str> = commands.iter().map(|c| c.reason.as_str()).collect();
    assert_eq!(reasons, vec!["Kick por itest", "second"]);
    assert!(commands.iter().all(|c| c.action == "Kick"));

    // A kick never touches the registry
    let response = server
        .game_get(&format!("/api/moderacao/checkBan/{user_id}"))
        .await
        .unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.banned);
}

#[tokio::test]
async fn test_invalid_action_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let user_id = unique_user_id();

    let body = json!({ "user_id": user_id, "action": "ban", "reason": "lowercase" });
    let response = server
        .post_auth("/api/moderacao/executeAction", &token, &body)
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.status, "error");

    let response = server
        .get_auth(&format!("/api/moderacao/logs/{user_id}"), &token)
        .await
        .unwrap();
    let logs: Vec<ActionLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(logs.is_empty());
}

#[tokio::test]
async fn test_reban_overwrites_reason_and_unban_is_logged() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();
    let user_id = unique_user_id();

    for reason in ["A", "B"] {
        let response = server
            .post_auth(
                "/api/moderacao/executeAction",
                &token,
                &ExecuteActionRequest::ban(user_id, reason),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .game_get(&format!("/api/moderacao/checkBan/{user_id}"))
        .await
        .unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status.reason.as_deref(), Some("B"));

    // user_id as a numeric string, the way the panel form posts it
    let body = json!({ "user_id": user_id.to_string() });
    let response = server
        .post_auth("/api/moderacao/unban", &token, &body)
        .await
        .unwrap();
    let ack: StatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.status, "success");

    let response = server
        .game_get(&format!("/api/moderacao/checkBan/{user_id}"))
        .await
        .unwrap();
    let status: BanStatus = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.banned);
    assert!(status.reason.is_none());

    let response = server
        .get_auth(&format!("/api/moderacao/logs/{user_id}"), &token)
        .await
        .unwrap();
    let logs: Vec<ActionLogView> = assert_json(response, StatusCode::OK).await.unwrap();
    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["Unban", "Ban", "Ban"]);

    // Unbanning again is accepted and still audited
    let response = server
        .post_auth("/api/moderacao/unban", &token, &UnbanRequest { user_id })
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Roster
// ============================================================================

#[tokio::test]
async fn test_roster_replace_and_clear() {
    if !check_test_env() {
        return;
    }

    let _guard = shared_state_lock().await;
    let server = TestServer::start().await.unwrap();
    let token = server.login().await.unwrap();

    let players = vec![PlayerPayload::new(1, "Alice"), PlayerPayload::new(2, "Bob")];
    let response = server
        .game_post("/api/moderacao/updatePlayers", &players)
        .await
        .unwrap();
    let ack: RosterUpdateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.status, "success");
    assert_eq!(ack.count, 2);

    let response = server.get_auth("/api/moderacao/players", &token).await.unwrap();
    let roster: Vec<PlayerView> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<(i64, &str)> = roster.iter().map(|p| (p.user_id, p.name.as_str())).collect();
    assert_eq!(names, vec![(1, "Alice"), (2, "Bob")]);

    let empty: Vec<PlayerPayload> = Vec::new();
    let response = server
        .game_post("/api/moderacao/updatePlayers", &empty)
        .await
        .unwrap();
    let ack: RosterUpdateResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.count, 0);

    let response = server.get_auth("/api/moderacao/players", &token).await.unwrap();
    let roster: Vec<PlayerView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(roster.is_empty());
}

#[tokio::test]
async fn test_roster_rejects_non_array_body() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .game_post("/api/moderacao/updatePlayers", &json!({ "UserId": 1, "Name": "Alice" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
