//! Integration test utilities for the moderation panel
//!
//! Spawns the real HTTP server against PostgreSQL and drives it with
//! `reqwest`, the way the game server and the panel would.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
