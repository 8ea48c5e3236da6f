//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub game_api: GameApiConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    #[serde(default)]
    pub bootstrap_moderators: Vec<BootstrapModerator>,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Credential shared with the game server
#[derive(Clone, Deserialize)]
pub struct GameApiConfig {
    pub api_key: String,
}

impl std::fmt::Debug for GameApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameApiConfig").field("api_key", &"***").finish()
    }
}

/// JWT configuration for moderator sessions
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    /// Secret was generated for this process because none was configured
    #[serde(default)]
    pub ephemeral: bool,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("ephemeral", &self.ephemeral)
            .finish()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Moderator account created on first start when none exist
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct BootstrapModerator {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapModerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapModerator")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl BootstrapModerator {
    /// Parse `user:password,user2:password2`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for entries without a username or password
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, ConfigError> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((user, pass)) if !user.trim().is_empty() && !pass.is_empty() => Ok(Self {
                    username: user.trim().to_string(),
                    password: pass.to_string(),
                }),
                _ => Err(ConfigError::InvalidValue(
                    "BOOTSTRAP_MODERATORS",
                    format!("expected user:password, got {entry:?}"),
                )),
            })
            .collect()
    }
}

// Default value functions
fn default_app_name() -> String {
    "modpanel".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_access_token_expiry() -> i64 {
    28800 // 8 hours, one moderation shift
}

fn default_requests_per_second() -> u32 {
    20
}

fn default_burst() -> u32 {
    60
}

/// Random per-process secret; tokens do not survive a restart
fn ephemeral_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Token lifetimes accepted from `JWT_ACCESS_TOKEN_EXPIRY`, in seconds
const ACCESS_TOKEN_EXPIRY_RANGE: std::ops::RangeInclusive<i64> = 60..=30 * 24 * 3600;

/// Parse an optional numeric variable; a value that is set but malformed is an error
fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = AppSettings {
            name: var("APP_NAME").unwrap_or_else(default_app_name),
            env: var("APP_ENV")
                .and_then(|s| Environment::parse(&s))
                .unwrap_or_default(),
        };

        let raw_port = var("API_PORT").ok_or(ConfigError::MissingVar("API_PORT"))?;
        let port = raw_port
            .parse()
            .map_err(|_| ConfigError::InvalidValue("API_PORT", raw_port))?;

        let (secret, ephemeral) = match var("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => (secret, false),
            None if app.env.is_production() => return Err(ConfigError::MissingVar("JWT_SECRET")),
            None => (ephemeral_secret(), true),
        };

        let access_token_expiry = parse_or(
            "JWT_ACCESS_TOKEN_EXPIRY",
            var("JWT_ACCESS_TOKEN_EXPIRY"),
            default_access_token_expiry,
        )?;
        if !ACCESS_TOKEN_EXPIRY_RANGE.contains(&access_token_expiry) {
            return Err(ConfigError::InvalidValue(
                "JWT_ACCESS_TOKEN_EXPIRY",
                access_token_expiry.to_string(),
            ));
        }

        let bootstrap_moderators = match var("BOOTSTRAP_MODERATORS") {
            Some(raw) => BootstrapModerator::parse_list(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    var("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    var("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
            },
            game_api: GameApiConfig {
                api_key: var("GAME_API_KEY")
                    .filter(|s| !s.is_empty())
                    .ok_or(ConfigError::MissingVar("GAME_API_KEY"))?,
            },
            jwt: JwtConfig {
                secret,
                ephemeral,
                access_token_expiry,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    var("RATE_LIMIT_REQUESTS_PER_SECOND"),
                    default_requests_per_second,
                )?,
                burst: parse_or("RATE_LIMIT_BURST", var("RATE_LIMIT_BURST"), default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            bootstrap_moderators,
            app,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
