/*
 * Responsibility
 * - 登録 (username / password の検証 + Argon2id ハッシュ保存)
 * - ログイン (資格情報の照合 → access token 発行)
 * - トークン検証 (validate-token エンドポイント用)
 */
use std::sync::Arc;

use shared::services::verifier::VerifiedPrincipal;
use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::repos::{PrincipalRepo, PrincipalRow};
use crate::services::auth::password::{self, MIN_PASSWORD_LEN};
use crate::services::auth::token_issuer::{IssuedToken, TokenIssuer};

pub const DEFAULT_ROLE: &str = "USER";

#[derive(Clone)]
pub struct AuthService {
    principals: Arc<dyn PrincipalRepo>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(principals: Arc<dyn PrincipalRepo>, tokens: TokenIssuer) -> Self {
        Self { principals, tokens }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<PrincipalRow, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::InvalidRequest("username must not be blank".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::InvalidRequest(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let password = password.to_string();
        let hash = tokio::task::spawn_blocking(move || password::hash_password(&password))
            .await
            .map_err(|e| {
                error!(error = %e, "password hashing task failed");
                AppError::Internal
            })?
            .map_err(|e| {
                error!(error = %e, "failed to hash password");
                AppError::Internal
            })?;

        let principal = self.principals.create(username, &hash, DEFAULT_ROLE).await?;
        info!(principal_id = principal.id, username = %principal.username, "principal registered");

        Ok(principal)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let principal = self.principals.find_by_username(username.trim()).await?;

        // Unknown usernames still pay for one Argon2 verification.
        let stored = principal.as_ref().map(|p| p.password_hash.clone());
        let candidate = password.to_string();
        let matches = tokio::task::spawn_blocking(move || match stored {
            Some(hash) => password::verify_password(&candidate, &hash),
            None => Ok(password::verify_against_dummy(&candidate)),
        })
        .await
        .map_err(|e| {
            error!(error = %e, "password verification task failed");
            AppError::Internal
        })?
        .map_err(|e| {
            error!(username = %username, error = %e, "stored password hash is unusable");
            AppError::Internal
        })?;

        let Some(principal) = principal else {
            debug!(username = %username, "login for unknown username");
            return Err(AppError::InvalidCredentials);
        };
        if !matches {
            warn!(principal_id = principal.id, "login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&principal)?;
        info!(principal_id = principal.id, expires_at = issued.expires_at, "access token issued");

        Ok(issued)
    }

    pub fn validate(&self, token: &str) -> Result<VerifiedPrincipal, AppError> {
        self.tokens.verify(token).map_err(|e| {
            debug!(error = %e, expired = e.is_expired(), "token rejected");
            AppError::Unauthorized
        })
    }
}
