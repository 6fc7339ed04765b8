/*
 * Responsibility
 * - GATEWAY_PORT / 各 upstream の URL / upstream timeout / CORS の読み込み
 * - URL は起動時に検証 (不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::time::Duration;

use shared::config::{self, AppEnv, ConfigError};
use url::Url;

use crate::routing::Upstream;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Upstreams {
    pub auth: Url,
    pub student: Url,
    pub todo: Url,
}

impl Upstreams {
    pub fn base_url(&self, upstream: Upstream) -> &Url {
        match upstream {
            Upstream::Auth => &self.auth,
            Upstream::Student => &self.student,
            Upstream::Todo => &self.todo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub upstreams: Upstreams,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        config::load_dotenv();

        let addr = config::bind_addr("GATEWAY_PORT", DEFAULT_PORT)?;
        let app_env = AppEnv::from_env();

        let upstreams = Upstreams {
            auth: upstream_url("AUTH_SERVICE_URL", "http://127.0.0.1:4000")?,
            student: upstream_url("STUDENT_SERVICE_URL", "http://127.0.0.1:3001")?,
            todo: upstream_url("TODO_SERVICE_URL", "http://127.0.0.1:3002")?,
        };

        let timeout_secs: u64 =
            config::parse_or("GATEWAY_UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid("GATEWAY_UPSTREAM_TIMEOUT_SECS"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins: config::list("CORS_ALLOWED_ORIGINS"),
            upstreams,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

pub fn parse_upstream(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn upstream_url(key: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = config::optional(key).unwrap_or_else(|| default.to_string());
    parse_upstream(&raw).ok_or(ConfigError::Invalid(key))
}
