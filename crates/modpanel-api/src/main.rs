//! Moderation panel API entry point
//!
//! Run with:
//! ```bash
//! cargo run -p modpanel-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use modpanel_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so it is loaded first
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting moderation panel API"
    );

    if config.jwt.ephemeral {
        warn!("JWT_SECRET not set; moderator sessions will not survive a restart");
    }

    modpanel_api::run(config).await?;

    Ok(())
}
