//! PostgreSQL connection pool

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Pool settings
///
/// Handlers hold a connection only for one statement or one short
/// transaction, so a small pool serves the game server and the panel.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long a request waits for a free connection before failing
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
    const IDLE_TIMEOUT: Duration = Duration::from_secs(600);
    const MAX_LIFETIME: Duration = Duration::from_secs(1800);

    /// Settings for `url` with a pool of `min..=max` connections
    pub fn new(url: impl Into<String>, min_connections: u32, max_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections: max_connections.max(1),
            min_connections: min_connections.min(max_connections),
            acquire_timeout: Self::ACQUIRE_TIMEOUT,
            idle_timeout: Self::IDLE_TIMEOUT,
            max_lifetime: Self::MAX_LIFETIME,
        }
    }
}

impl From<&modpanel_common::DatabaseConfig> for DatabaseConfig {
    fn from(config: &modpanel_common::DatabaseConfig) -> Self {
        Self::new(config.url.clone(), config.min_connections, config.max_connections)
    }
}

/// Open the pool and establish the minimum number of connections
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database pool ready"
    );

    Ok(pool)
}
