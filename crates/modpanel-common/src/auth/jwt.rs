//! Moderator session tokens
//!
//! HS256 access tokens carrying the moderator username. There is no refresh
//! flow; a moderator logs in again when the token lapses.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const ISSUER: &str = "modpanel";
const MODERATOR_ROLE: &str = "moderator";

/// Token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Moderator username
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub role: String,
}

impl Claims {
    pub fn moderator(&self) -> &str {
        &self.sub
    }
}

/// Token handed back by `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Issues and checks moderator tokens with one shared secret
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_secs: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, lifetime_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime_secs,
        }
    }

    /// Sign a token for `moderator`
    pub fn issue(&self, moderator: &str) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.lifetime_secs)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "token lifetime out of range: {}s",
                    self.lifetime_secs
                ))
            })?;
        let claims = Claims {
            sub: moderator.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            role: MODERATOR_ROLE.to_string(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("signing moderator token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.lifetime_secs,
        })
    }

    /// Verify signature, issuer and expiry, then require the moderator role
    pub fn validate_moderator_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?
            .claims;

        if claims.role != MODERATOR_ROLE || claims.sub.is_empty() {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish_non_exhaustive()
    }
}
