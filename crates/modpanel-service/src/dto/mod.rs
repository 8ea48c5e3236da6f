//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs
//!
//! Game-server payloads keep the PascalCase keys (`UserId`, `Name`, `Action`,
//! `Reason`) the game scripts already use.

mod de;
pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ExecuteActionRequest, LoginRequest, PlayerPayload, RecentLogsQuery, UnbanRequest};
pub use responses::{
    ActionLogResponse, BanResponse, BanStatusResponse, CommandDelivery, HealthChecks,
    HealthResponse, LoginResponse, PlayerResponse, ReadinessResponse, RosterUpdateResponse,
    StatusResponse,
};
