//! # modpanel-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `modpanel-core`. It handles:
//!
//! - Connection pool management
//! - Idempotent schema creation at startup
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modpanel_db::{create_pool, ensure_schema, DatabaseConfig, PgCommandQueueRepository};
//! use modpanel_core::traits::CommandQueueRepository;
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     ensure_schema(&pool).await?;
//!
//!     let queue = PgCommandQueueRepository::new(pool);
//!     let commands = queue.drain().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgActionLogRepository, PgBanRepository, PgCommandQueueRepository, PgModeratorRepository,
    PgRosterRepository,
};
pub use schema::ensure_schema;
