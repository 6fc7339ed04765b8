/// Factory: build a `TokenVerifier` from the service's environment.
use std::sync::Arc;
use std::time::Duration;

use crate::config::{self, ConfigError, JwtSettings};
use crate::services::verifier::{
    HttpTokenVerifier, LocalTokenVerifier, client::SharedVerifier,
};

#[derive(Debug, Clone)]
pub enum VerifierSettings {
    Remote {
        auth_service_url: String,
        timeout: Duration,
    },
    Local(JwtSettings),
}

impl VerifierSettings {
    /// `AUTH_VERIFY_MODE=remote` (default) or `local`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = config::optional("AUTH_VERIFY_MODE").unwrap_or_else(|| "remote".to_string());

        match mode.to_ascii_lowercase().as_str() {
            "remote" | "http" => {
                let auth_service_url = config::optional("AUTH_SERVICE_URL")
                    .unwrap_or_else(|| "http://127.0.0.1:4000".to_string());
                let timeout_ms: u64 = config::parse_or("AUTH_VERIFY_TIMEOUT_MS", 2_000)?;
                Ok(Self::Remote {
                    auth_service_url,
                    timeout: Duration::from_millis(timeout_ms),
                })
            }
            "local" => Ok(Self::Local(JwtSettings::from_env()?)),
            _ => Err(ConfigError::Invalid("AUTH_VERIFY_MODE")),
        }
    }
}

pub fn build_token_verifier(settings: &VerifierSettings) -> Result<SharedVerifier, ConfigError> {
    match settings {
        VerifierSettings::Remote {
            auth_service_url,
            timeout,
        } => {
            let verifier = HttpTokenVerifier::new(auth_service_url, *timeout)
                .map_err(|_| ConfigError::Invalid("AUTH_SERVICE_URL"))?;
            Ok(Arc::new(verifier))
        }
        VerifierSettings::Local(jwt) => Ok(Arc::new(LocalTokenVerifier::from_settings(jwt))),
    }
}
