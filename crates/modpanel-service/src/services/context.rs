//! Service context - dependency container for services
//!
//! Holds the database pool, every repository, and the two credential checkers.

use std::sync::Arc;

use modpanel_common::auth::{ApiKey, JwtService};
use modpanel_core::traits::{
    ActionLogRepository, BanRepository, CommandQueueRepository, ModeratorRepository,
    RosterRepository,
};
use modpanel_db::{
    PgActionLogRepository, PgBanRepository, PgCommandQueueRepository, PgModeratorRepository,
    PgPool, PgRosterRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every field is reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    command_repo: Arc<dyn CommandQueueRepository>,
    ban_repo: Arc<dyn BanRepository>,
    action_log_repo: Arc<dyn ActionLogRepository>,
    roster_repo: Arc<dyn RosterRepository>,
    moderator_repo: Arc<dyn ModeratorRepository>,

    // Credentials
    jwt_service: Arc<JwtService>,
    api_key: Arc<ApiKey>,
}

impl ServiceContext {
    /// Context backed by the PostgreSQL repositories sharing `pool`
    pub fn postgres(pool: PgPool, jwt_service: JwtService, api_key: ApiKey) -> Self {
        Self {
            command_repo: Arc::new(PgCommandQueueRepository::new(pool.clone())),
            ban_repo: Arc::new(PgBanRepository::new(pool.clone())),
            action_log_repo: Arc::new(PgActionLogRepository::new(pool.clone())),
            roster_repo: Arc::new(PgRosterRepository::new(pool.clone())),
            moderator_repo: Arc::new(PgModeratorRepository::new(pool.clone())),
            pool,
            jwt_service: Arc::new(jwt_service),
            api_key: Arc::new(api_key),
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn command_repo(&self) -> &dyn CommandQueueRepository {
        self.command_repo.as_ref()
    }

    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    pub fn action_log_repo(&self) -> &dyn ActionLogRepository {
        self.action_log_repo.as_ref()
    }

    pub fn roster_repo(&self) -> &dyn RosterRepository {
        self.roster_repo.as_ref()
    }

    pub fn moderator_repo(&self) -> &dyn ModeratorRepository {
        self.moderator_repo.as_ref()
    }

    // === Credentials ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Shared secret expected from the game server
    pub fn api_key(&self) -> &ApiKey {
        self.api_key.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    command_repo: Option<Arc<dyn CommandQueueRepository>>,
    ban_repo: Option<Arc<dyn BanRepository>>,
    action_log_repo: Option<Arc<dyn ActionLogRepository>>,
    roster_repo: Option<Arc<dyn RosterRepository>>,
    moderator_repo: Option<Arc<dyn ModeratorRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    api_key: Option<Arc<ApiKey>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn command_repo(mut self, repo: Arc<dyn CommandQueueRepository>) -> Self {
        self.command_repo = Some(repo);
        self
    }

    pub fn ban_repo(mut self, repo: Arc<dyn BanRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    pub fn action_log_repo(mut self, repo: Arc<dyn ActionLogRepository>) -> Self {
        self.action_log_repo = Some(repo);
        self
    }

    pub fn roster_repo(mut self, repo: Arc<dyn RosterRepository>) -> Self {
        self.roster_repo = Some(repo);
        self
    }

    pub fn moderator_repo(mut self, repo: Arc<dyn ModeratorRepository>) -> Self {
        self.moderator_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: JwtService) -> Self {
        self.jwt_service = Some(Arc::new(service));
        self
    }

    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(Arc::new(key));
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            command_repo: required(self.command_repo, "command_repo")?,
            ban_repo: required(self.ban_repo, "ban_repo")?,
            action_log_repo: required(self.action_log_repo, "action_log_repo")?,
            roster_repo: required(self.roster_repo, "roster_repo")?,
            moderator_repo: required(self.moderator_repo, "moderator_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            api_key: required(self.api_key, "api_key")?,
        })
    }
}
