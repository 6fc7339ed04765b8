use std::net::SocketAddr;

use shared::config::{self, AppEnv, ConfigError};
use shared::services::verifier::VerifierSettings;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    // None => in-process store (development only)
    pub database_url: Option<String>,
    pub verifier: VerifierSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        config::load_dotenv();

        let addr = config::bind_addr("STUDENT_PORT", DEFAULT_PORT)?;
        let app_env = AppEnv::from_env();

        let database_url = config::optional("DATABASE_URL");
        if database_url.is_none() && app_env.is_production() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Config {
            addr,
            app_env,
            database_url,
            verifier: VerifierSettings::from_env()?,
        })
    }
}
