use async_trait::async_trait;
use tracing::debug;

use crate::config::JwtSettings;
use crate::services::access_jwt::AccessJwtVerifier;
use crate::services::verifier::client::{TokenVerifier, VerifiedPrincipal, VerifyError};

/// In-process verifier using the shared secret. No network call.
#[derive(Clone, Debug)]
pub struct LocalTokenVerifier {
    jwt: AccessJwtVerifier,
}

impl LocalTokenVerifier {
    pub fn new(jwt: AccessJwtVerifier) -> Self {
        Self { jwt }
    }

    pub fn from_settings(settings: &JwtSettings) -> Self {
        Self::new(AccessJwtVerifier::from_settings(settings))
    }
}

#[async_trait]
impl TokenVerifier for LocalTokenVerifier {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    async fn verify(&self, token: &str) -> Result<VerifiedPrincipal, VerifyError> {
        self.jwt.verify_verified(token).map_err(|e| {
            debug!(error = %e, "local token verification failed");
            VerifyError::Rejected
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::access_jwt::AccessTokenClaims;
    use jsonwebtoken::{Algorithm, EncodingKey, Header};

    fn settings() -> JwtSettings {
        JwtSettings {
            secret: "local-verifier-secret-0123456789ab".to_string(),
            issuer: "campus-auth".to_string(),
            audience: "campus-api".to_string(),
            leeway_seconds: 0,
        }
    }

    fn token_for(sub: &str, exp_offset: i64, secret: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = AccessTokenClaims {
            iss: "campus-auth".to_string(),
            aud: "campus-api".to_string(),
            sub: sub.to_string(),
            iat: now,
            exp: now + exp_offset,
            jti: "local-jti".to_string(),
            username: None,
            role: None,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn accepts_token_signed_with_shared_secret() {
        let s = settings();
        let verifier = LocalTokenVerifier::from_settings(&s);
        let token = token_for("3", 300, &s.secret);

        let v = verifier.verify(&token).await.expect("valid");
        assert_eq!(v.principal_id, 3);
        assert_eq!(v.jti.as_deref(), Some("local-jti"));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let s = settings();
        let verifier = LocalTokenVerifier::from_settings(&s);
        let token = token_for("3", -5, &s.secret);

        assert!(matches!(
            verifier.verify(&token).await,
            Err(VerifyError::Rejected)
        ));
    }
}
