//! Route handlers
//!
//! HTTP request handlers grouped by caller.

pub mod auth;
pub mod game;
pub mod health;
pub mod moderation;
