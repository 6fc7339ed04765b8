use shared::config::JwtSettings;
use tracing::error;
use shared::services::{AccessJwtError, AccessJwtVerifier, AccessTokenClaims};
use shared::services::verifier::VerifiedPrincipal;
use uuid::Uuid;

use crate::error::AppError;
use crate::repos::PrincipalRow;
use crate::services::auth::jwt::JwtIssuer;

/// Service-level return type to keep handlers thin.
#[derive(Clone, Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: i64,
}

/// Token Issuer: signs tokens for authenticated principals and verifies presented ones.
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    jwt: JwtIssuer,
    verifier: AccessJwtVerifier,
}

impl TokenIssuer {
    pub fn new(jwt: JwtIssuer, verifier: AccessJwtVerifier) -> Self {
        Self { jwt, verifier }
    }

    pub fn from_settings(settings: &JwtSettings, ttl_seconds: u64) -> Result<Self, AppError> {
        let jwt = JwtIssuer::new(
            settings.secret.as_bytes(),
            settings.issuer.clone(),
            settings.audience.clone(),
            ttl_seconds,
        )?;
        Ok(Self::new(jwt, AccessJwtVerifier::from_settings(settings)))
    }

    pub fn issue(&self, principal: &PrincipalRow) -> Result<IssuedToken, AppError> {
        self.issue_at(principal, chrono::Utc::now().timestamp())
    }

    /// Issue with an explicit issued-at (unix seconds). `exp = iat + ttl`.
    pub fn issue_at(&self, principal: &PrincipalRow, issued_at: i64) -> Result<IssuedToken, AppError> {
        let exp = issued_at
            .checked_add(self.jwt.ttl_seconds())
            .ok_or_else(|| {
                error!(issued_at, ttl = self.jwt.ttl_seconds(), "token expiry overflows");
                AppError::Internal
            })?;

        let claims = AccessTokenClaims {
            iss: self.jwt.issuer().to_string(),
            aud: self.jwt.audience().to_string(),
            sub: principal.id.to_string(),
            iat: issued_at,
            exp,
            jti: Uuid::new_v4().to_string(),
            username: Some(principal.username.clone()),
            role: Some(principal.role.clone()),
        };

        Ok(IssuedToken {
            access_token: self.jwt.sign(&claims)?,
            expires_at: exp,
        })
    }

    pub fn verify(&self, token: &str) -> Result<VerifiedPrincipal, AccessJwtError> {
        self.verifier.verify_verified(token)
    }
}
