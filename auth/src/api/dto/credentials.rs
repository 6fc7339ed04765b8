use serde::Deserialize;

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Query (or form body) of `POST /auth/login`.
///
/// Both fields are optional at the wire level; a missing one is treated
/// as a credential mismatch rather than a malformed request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginParams {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginParams {
    /// Field-wise merge; `self` wins.
    pub fn or(self, other: LoginParams) -> LoginParams {
        LoginParams {
            username: self.username.or(other.username),
            password: self.password.or(other.password),
        }
    }
}
