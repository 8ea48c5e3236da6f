//! Authentication utilities
//!
//! Two credentials exist: the shared API key presented by the game server, and
//! JWT access tokens issued to moderators after a password login.

mod api_key;
mod jwt;
mod password;

pub use api_key::ApiKey;
pub use jwt::{Claims, IssuedToken, JwtService};
pub use password::{hash_password, verify_password};
