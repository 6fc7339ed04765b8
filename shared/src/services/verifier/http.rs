use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::services::verifier::client::{
    TokenVerifier, ValidateTokenResponse, VerifiedPrincipal, VerifyError,
};

pub const VALIDATE_TOKEN_PATH: &str = "auth/validate-token";

/// Remote verifier: asks the Authentication service about every token.
///
/// One `GET /auth/validate-token?token=...` per call, bounded by `timeout`.
#[derive(Clone, Debug)]
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTokenVerifier {
    // `auth_base_url` is the Authentication service root, e.g. `http://auth:4000`.
    pub fn new(auth_base_url: &str, timeout: Duration) -> Result<Self, VerifyError> {
        let mut base =
            Url::parse(auth_base_url).map_err(|e| VerifyError::Config(e.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(VALIDATE_TOKEN_PATH)
            .map_err(|e| VerifyError::Config(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerifyError::Config(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn map_transport(e: reqwest::Error) -> VerifyError {
    if e.is_timeout() {
        VerifyError::Timeout
    } else {
        VerifyError::Transport(e.to_string())
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn verify(&self, token: &str) -> Result<VerifiedPrincipal, VerifyError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("token", token);

        let resp = self.client.get(url).send().await.map_err(map_transport)?;
        let status = resp.status();
        debug!(status = status.as_u16(), "validate-token response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(VerifyError::Rejected);
        }
        if !status.is_success() {
            return Err(VerifyError::UnexpectedStatus(status.as_u16()));
        }

        let body: ValidateTokenResponse = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                VerifyError::Timeout
            } else {
                VerifyError::InvalidResponse(e.to_string())
            }
        })?;

        if body.principal_id <= 0 {
            return Err(VerifyError::InvalidResponse(format!(
                "principal_id must be positive, got {}",
                body.principal_id
            )));
        }

        Ok(body.into())
    }
}
