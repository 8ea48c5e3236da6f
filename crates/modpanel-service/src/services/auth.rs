//! Authentication service
//!
//! Moderator password login, session token validation, game-server API key
//! checks, and first-start seeding of moderator accounts.

use modpanel_common::auth::{hash_password, verify_password, Claims};
use modpanel_common::{AppError, BootstrapModerator};
use modpanel_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let password_hash = self
            .ctx
            .moderator_repo()
            .get_password_hash(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: unknown moderator");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(username = %request.username, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self.ctx.jwt_service().issue(&request.username)?;

        info!(username = %request.username, "Moderator logged in");

        Ok(LoginResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            username: request.username,
        })
    }

    /// Validate a moderator bearer token and return its claims
    #[instrument(skip(self, token))]
    pub fn authenticate(&self, token: &str) -> ServiceResult<Claims> {
        self.ctx
            .jwt_service()
            .validate_moderator_token(token)
            .map_err(|e| {
                warn!(error = %e, "Rejected moderator token");
                ServiceError::from(e)
            })
    }

    /// Check the key presented by the game server
    pub fn verify_game_key(&self, presented: Option<&str>) -> ServiceResult<()> {
        match presented {
            Some(key) if self.ctx.api_key().matches(key) => Ok(()),
            Some(_) => {
                warn!("Rejected game server request: wrong API key");
                Err(AppError::InvalidApiKey.into())
            }
            None => {
                warn!("Rejected game server request: missing API key");
                Err(AppError::InvalidApiKey.into())
            }
        }
    }

    /// Create the configured moderators when the table is empty
    ///
    /// Returns the number of accounts created.
    #[instrument(skip(self, moderators), fields(configured = moderators.len()))]
    pub async fn bootstrap_moderators(&self, moderators: &[BootstrapModerator]) -> ServiceResult<usize> {
        let existing = self.ctx.moderator_repo().count().await?;
        if existing > 0 {
            info!(existing, "Moderators already present, skipping bootstrap");
            return Ok(0);
        }
        if moderators.is_empty() {
            warn!("No moderator accounts exist and none are configured; nobody can log in");
            return Ok(0);
        }

        let mut created = 0;
        for moderator in moderators {
            let hash = hash_password(&moderator.password)?;
            match self.ctx.moderator_repo().create(&moderator.username, &hash).await {
                Ok(_) => {
                    info!(username = %moderator.username, "Moderator account created");
                    created += 1;
                }
                Err(DomainError::ModeratorExists(username)) => {
                    warn!(username = %username, "Moderator listed twice, skipping");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(created)
    }
}
