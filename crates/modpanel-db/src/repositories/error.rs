//! sqlx → `DomainError` conversion shared by the repositories

use modpanel_core::error::DomainError;

/// Every driver failure is a store failure; the driver text is kept for logs
pub(crate) fn map_db_error(e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::PoolTimedOut => DomainError::DatabaseError("connection pool exhausted".to_string()),
        other => DomainError::DatabaseError(other.to_string()),
    }
}

/// Unique-key conflicts become `conflict()`, anything else a store failure
pub(crate) fn map_unique_violation(
    e: sqlx::Error,
    conflict: impl FnOnce() -> DomainError,
) -> DomainError {
    let is_unique = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if is_unique {
        conflict()
    } else {
        map_db_error(e)
    }
}
