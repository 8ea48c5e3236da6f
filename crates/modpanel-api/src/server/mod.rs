//! Server setup and initialization
//!
//! Provides the application builder and the server runner.

use std::net::SocketAddr;

use axum::Router;
use modpanel_common::{ApiKey, AppConfig, AppError, JwtService};
use modpanel_db::{create_pool, ensure_schema, DatabaseConfig};
use modpanel_service::{AuthService, ServiceContext};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes skip the rate limiter so a busy game server cannot make the
/// process look dead.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Connect to the database, prepare the schema, and assemble the AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);
    let api_key = ApiKey::new(config.game_api.api_key.clone());
    let service_context = ServiceContext::postgres(pool, jwt_service, api_key);

    let created = AuthService::new(&service_context)
        .bootstrap_moderators(&config.bootstrap_moderators)
        .await?;
    if created > 0 {
        info!(created, "Seeded moderator accounts");
    }

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on `listener` until Ctrl-C
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
