/*
 * Responsibility
 * - 環境変数の読み込み (TODO_PORT, DATABASE_URL, TODO_REQUIRE_AUTH など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::net::SocketAddr;

use shared::config::{self, AppEnv, ConfigError};
use shared::services::verifier::VerifierSettings;

pub const DEFAULT_PORT: u16 = 3002;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub database_url: Option<String>,
    // Some only when TODO_REQUIRE_AUTH=true
    pub verifier: Option<VerifierSettings>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        config::load_dotenv();

        let addr = config::bind_addr("TODO_PORT", DEFAULT_PORT)?;
        let app_env = AppEnv::from_env();

        let database_url = config::optional("DATABASE_URL");
        if database_url.is_none() && app_env.is_production() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let verifier = if config::flag("TODO_REQUIRE_AUTH", false)? {
            Some(VerifierSettings::from_env()?)
        } else {
            None
        };

        Ok(Config {
            addr,
            app_env,
            database_url,
            verifier,
        })
    }
}
