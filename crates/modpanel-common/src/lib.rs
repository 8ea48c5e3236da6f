//! # modpanel-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, ApiKey, Claims, IssuedToken, JwtService};
pub use config::{
    AppConfig, AppSettings, BootstrapModerator, ConfigError, CorsConfig, DatabaseConfig,
    Environment, GameApiConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing_with_config, LogFormat, TracingConfig, TracingError};
