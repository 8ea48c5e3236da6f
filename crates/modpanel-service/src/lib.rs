//! # modpanel-service
//!
//! Application layer containing the moderation use cases, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuditService, AuthService, BanService, CommandQueueService, ModerationService, RosterService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
