/*
 * Responsibility
 * - 各サービス共通の環境変数読み込みヘルパ
 * - AppEnv / ConfigError / JWT 設定 (issuer と local verifier で同じ値を使う)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::{env, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load `.env` if present. Real environment variables win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub fn optional(key: &'static str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse `key` when set, otherwise fall back to `default`.
/// A value that is present but does not parse is a startup error.
pub fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

pub fn flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match optional(key) {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(key)),
        },
        None => Ok(default),
    }
}

pub fn list(key: &'static str) -> Vec<String> {
    env::var(key)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn bind_addr(port_key: &'static str, default_port: u16) -> Result<SocketAddr, ConfigError> {
    let port: u16 = parse_or(port_key, default_port)?;
    SocketAddr::from_str(&format!("0.0.0.0:{}", port)).map_err(|_| ConfigError::Invalid(port_key))
}

pub const MIN_SECRET_LEN: usize = 32;

/// Shared-secret JWT settings.
///
/// The issuer signs with these and `LocalTokenVerifier` checks with the same values,
/// so both sides read them through this one loader.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub leeway_seconds: u64,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the secret
        f.debug_struct("JwtSettings")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl JwtSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = required("JWT_SECRET")?;
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        Ok(Self {
            secret,
            issuer: optional("AUTH_ISSUER").unwrap_or_else(|| "campus-auth".to_string()),
            audience: optional("AUTH_AUDIENCE").unwrap_or_else(|| "campus-api".to_string()),
            leeway_seconds: parse_or("ACCESS_TOKEN_LEEWAY_SECONDS", 0)?,
        })
    }
}
