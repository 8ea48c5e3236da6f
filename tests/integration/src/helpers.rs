//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests as
//! either the game server or a moderator.

use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Result;
use modpanel_api::{create_app, create_app_state, run_server};
use modpanel_common::{hash_password, AppConfig};
use modpanel_core::DomainError;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::fixtures::{LoginRequest, LoginResponse};

/// Game server key configured on every test server
pub const TEST_API_KEY: &str = "integration-game-key";

/// Moderator account created for the tests
pub const TEST_MODERATOR: &str = "itest";
pub const TEST_PASSWORD: &str = "itest-password";

const TEST_JWT_SECRET: &str = "integration-test-jwt-secret-0123456789";

/// Serialises tests that drain the queue or replace the roster
///
/// Both operations act on every row, so concurrent tests would observe each
/// other's data.
pub async fn shared_state_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().await
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;

        // Other suites may have populated the moderators table already, which
        // skips bootstrap seeding, so the test account is created directly
        let moderators = state.service_context().moderator_repo();
        if moderators.find_by_username(TEST_MODERATOR).await?.is_none() {
            let hash = hash_password(TEST_PASSWORD)?;
            match moderators.create(TEST_MODERATOR, &hash).await {
                Ok(_) | Err(DomainError::ModeratorExists(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }

        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            run_server(app, listener).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make an unauthenticated GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make an unauthenticated POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// GET as the game server
    pub async fn game_get(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("X-API-Key", TEST_API_KEY)
            .send()
            .await?)
    }

    /// POST as the game server
    pub async fn game_post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("X-API-Key", TEST_API_KEY)
            .json(body)
            .send()
            .await?)
    }

    /// GET with a moderator token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).bearer_auth(token).send().await?)
    }

    /// POST with a moderator token
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Log in as the test moderator and return the access token
    pub async fn login(&self) -> Result<String> {
        let response = self.post("/auth/login", &LoginRequest::test_moderator()).await?;
        let login: LoginResponse = assert_json(response, StatusCode::OK).await?;
        Ok(login.access_token)
    }
}

/// Configuration for a test server against `DATABASE_URL`
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_vars(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "GAME_API_KEY" => Some(TEST_API_KEY.to_string()),
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        "RATE_LIMIT_BURST" => Some("1000".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" => Some("1000".to_string()),
        "DATABASE_MAX_CONNECTIONS" => Some("5".to_string()),
        other => std::env::var(other).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
