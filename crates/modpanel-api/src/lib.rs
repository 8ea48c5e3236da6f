//! # modpanel-api
//!
//! HTTP API built with the Axum framework.
//!
//! Two audiences share one router: the game server, which authenticates with
//! a shared `X-API-Key`, and moderators, who log in and send a bearer token.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
