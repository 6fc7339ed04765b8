use std::net::SocketAddr;

use shared::config::{self, AppEnv, ConfigError, JwtSettings};

pub const DEFAULT_PORT: u16 = 4000;
// 10 hours
pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: u64 = 36_000;
// exp is an i64 unix timestamp
pub const MAX_ACCESS_TOKEN_TTL_SECONDS: u64 = i64::MAX as u64;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    // None => in-process store (development only)
    pub database_url: Option<String>,
    pub jwt: JwtSettings,
    pub access_token_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        config::load_dotenv();

        let addr = config::bind_addr("AUTH_PORT", DEFAULT_PORT)?;
        let app_env = AppEnv::from_env();

        let database_url = config::optional("DATABASE_URL");
        if database_url.is_none() && app_env.is_production() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let jwt = JwtSettings::from_env()?;
        let access_token_ttl_seconds =
            config::parse_or("ACCESS_TOKEN_TTL_SECONDS", DEFAULT_ACCESS_TOKEN_TTL_SECONDS)?;
        if access_token_ttl_seconds == 0 || access_token_ttl_seconds > MAX_ACCESS_TOKEN_TTL_SECONDS {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_TTL_SECONDS"));
        }

        Ok(Config {
            addr,
            app_env,
            database_url,
            jwt,
            access_token_ttl_seconds,
        })
    }
}
