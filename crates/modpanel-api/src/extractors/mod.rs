//! Axum extractors for request handling
//!
//! Credential checks for both audiences, JSON bodies, path and query parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{GameServer, ModeratorAuth};
pub use path::{UserIdPath, ValidPath};
pub use query::ValidQuery;
pub use validated::{JsonBody, ValidatedJson};
