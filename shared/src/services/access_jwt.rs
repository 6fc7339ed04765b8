use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt};

use crate::config::JwtSettings;
use crate::services::verifier::VerifiedPrincipal;

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
    InvalidSub,
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
            Self::InvalidSub => write!(f, "invalid 'sub' (expected principal id)"),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

impl AccessJwtError {
    /// True when the only problem is that the token is past `exp`.
    pub fn is_expired(&self) -> bool {
        matches!(
            self,
            Self::Jwt(e) if matches!(e.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature)
        )
    }
}

/// Access token (JWT) claims.
///
/// The issuer serializes this exact type, so both sides agree on the shape.
/// `sub` is the principal id rendered as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// HS256 access-token verifier (shared secret).
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AccessJwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessJwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AccessJwtVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessJwtVerifier {
    pub fn new(secret: &[u8], issuer: &str, audience: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn from_settings(settings: &JwtSettings) -> Self {
        Self::new(
            settings.secret.as_bytes(),
            &settings.issuer,
            &settings.audience,
            settings.leeway_seconds,
        )
    }

    // Verify and decode a JWT access token.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + strict claim validation.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature
    /// - `exp`
    /// - `iss` and `aud` (because we set them)
    ///
    /// This method additionally checks:
    /// - `iss`, `sub`, `jti` are not empty
    /// - `sub` parses as a principal id
    pub fn verify_strict(&self, token: &str) -> Result<AccessTokenClaims, AccessJwtError> {
        let claims = self.verify(token)?;

        if claims.iss.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("iss"));
        }
        if claims.sub.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("sub"));
        }
        if claims.jti.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("jti"));
        }
        Self::parse_sub(&claims.sub)?;

        Ok(claims)
    }

    /// Verify + strict claim validation, then convert claims into an application-friendly type.
    ///
    /// This is the entry-point for the issuer's validate endpoint and for `LocalTokenVerifier`.
    pub fn verify_verified(&self, token: &str) -> Result<VerifiedPrincipal, AccessJwtError> {
        let claims = self.verify_strict(token)?;
        let principal_id = Self::parse_sub(&claims.sub)?;

        Ok(VerifiedPrincipal {
            principal_id,
            username: claims.username,
            role: claims.role,
            jti: Some(claims.jti),
            expires_at: Some(claims.exp),
        })
    }

    // Helper: parse `sub` into a principal id
    pub fn parse_sub(sub: &str) -> Result<i64, AccessJwtError> {
        match sub.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AccessJwtError::InvalidSub),
        }
    }
}
