//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Moderator not found: {0}")]
    ModeratorNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid user id: {0}")]
    InvalidUserId(i64),

    #[error("Invalid action: {0:?} (expected Kick or Ban)")]
    InvalidAction(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Moderator already exists: {0}")]
    ModeratorExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ModeratorNotFound(_) => "UNKNOWN_MODERATOR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUserId(_) => "INVALID_USER_ID",
            Self::InvalidAction(_) => "INVALID_ACTION",
            Self::ModeratorExists(_) => "MODERATOR_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModeratorNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidUserId(_) | Self::InvalidAction(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ModeratorExists(_))
    }

    /// Check if this came from the persistence layer
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
