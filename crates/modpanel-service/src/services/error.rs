//! Service layer error type

use modpanel_common::AppError;
use modpanel_core::DomainError;

/// Error returned by every service operation
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Rejected input or a repository failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Credential and infrastructure failures
    #[error(transparent)]
    App(#[from] AppError),

    /// Request DTO failed its `validator` rules
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status the API layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_conflict() => 409,
            Self::Domain(_) | Self::Internal(_) => 500,
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Failure of the store or the process, as opposed to bad input
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
