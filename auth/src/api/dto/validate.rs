use serde::Deserialize;

pub use shared::services::verifier::ValidateTokenResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateTokenParams {
    pub token: Option<String>,
}
