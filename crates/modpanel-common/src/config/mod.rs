//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BootstrapModerator, ConfigError, CorsConfig, DatabaseConfig,
    Environment, GameApiConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
