use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::AppError;

/// HS256 signer. The same shared secret is used by `AccessJwtVerifier`.
#[derive(Clone)]
pub struct JwtIssuer {
    issuer: String,
    audience: String,
    ttl_seconds: i64,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl JwtIssuer {
    /// `secret` must be at least `shared::config::MIN_SECRET_LEN` bytes and
    /// `ttl_seconds` must fit in an `i64`.
    pub fn new(
        secret: &[u8],
        issuer: String,
        audience: String,
        ttl_seconds: u64,
    ) -> Result<Self, AppError> {
        if secret.len() < shared::config::MIN_SECRET_LEN {
            warn!(
                len = secret.len(),
                min = shared::config::MIN_SECRET_LEN,
                "JWT secret too short"
            );
            return Err(AppError::Internal);
        }

        let Ok(ttl_seconds) = i64::try_from(ttl_seconds) else {
            warn!(ttl_seconds, "JWT ttl out of range");
            return Err(AppError::Internal);
        };

        Ok(Self {
            issuer,
            audience,
            ttl_seconds,
            encoding_key: EncodingKey::from_secret(secret),
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, AppError> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign JWT");
            AppError::Internal
        })
    }
}
