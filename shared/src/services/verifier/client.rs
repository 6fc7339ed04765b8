//! Verifier interface used by the access middleware.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPrincipal {
    pub principal_id: i64,
    pub username: Option<String>,
    pub role: Option<String>,
    pub jti: Option<String>,
    // unix timestamp (seconds)
    pub expires_at: Option<i64>,
}

/// Verification failures.
///
/// Kept independent from any HTTP status so callers decide how to fail.
/// The access middleware fails closed: every variant becomes 401.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("token rejected by issuer")]
    Rejected,
    #[error("verification timed out")]
    Timeout,
    #[error("verification transport error: {0}")]
    Transport(String),
    #[error("unexpected verification status: {0}")]
    UnexpectedStatus(u16),
    #[error("invalid verification response: {0}")]
    InvalidResponse(String),
    #[error("verifier misconfigured: {0}")]
    Config(String),
}

/// Body of `GET /auth/validate-token` on success.
///
/// The Authentication service serializes it, `HttpTokenVerifier` deserializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub principal_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl From<VerifiedPrincipal> for ValidateTokenResponse {
    fn from(v: VerifiedPrincipal) -> Self {
        Self {
            principal_id: v.principal_id,
            username: v.username,
            role: v.role,
            jti: v.jti,
            expires_at: v.expires_at,
        }
    }
}

impl From<ValidateTokenResponse> for VerifiedPrincipal {
    fn from(r: ValidateTokenResponse) -> Self {
        Self {
            principal_id: r.principal_id,
            username: r.username,
            role: r.role,
            jti: r.jti,
            expires_at: r.expires_at,
        }
    }
}

#[async_trait]
pub trait TokenVerifier: Send + Sync + 'static {
    // Returns the verifier backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Exactly one verification attempt. No retry, no caching.
    async fn verify(&self, token: &str) -> Result<VerifiedPrincipal, VerifyError>;
}

pub type SharedVerifier = Arc<dyn TokenVerifier>;
