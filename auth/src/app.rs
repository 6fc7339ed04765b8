/*
 * Responsibility
 * - Config読み込み → 依存生成 (principal store / TokenIssuer) → Router 組み立て
 * - HTTP middleware の適用
 * - axum::serve() で起動
 */
use axum::{Router, routing::get};
use std::sync::Arc;

use shared::middleware::http::{self, HttpLimits};
use shared::telemetry;

use crate::api;
use crate::config::Config;
use crate::error::AppError;
use crate::repos::{MemoryPrincipalRepo, PgPrincipalRepo, PrincipalRepo};
use crate::services::auth::{AuthService, TokenIssuer};
use crate::state::AppState;

pub async fn run() -> Result<(), AppError> {
    telemetry::init_tracing("info,auth=debug,tower_http=info");
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting auth service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| {
            tracing::error!(addr = %config.addr, error = %e, "failed to bind");
            AppError::Internal
        })?;
    axum::serve(listener, app)
        .await
        .map_err(|_| AppError::Internal)?;

    Ok(())
}

pub async fn build_state(config: &Config) -> Result<AppState, AppError> {
    let principals: Arc<dyn PrincipalRepo> = match &config.database_url {
        Some(url) => {
            let pool = shared::db::connect(url).await.map_err(|e| {
                tracing::error!(error = %e, "failed to connect to database");
                AppError::Internal
            })?;
            let repo = PgPrincipalRepo::new(pool);
            repo.ensure_schema().await?;
            Arc::new(repo)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; principals are kept in memory");
            Arc::new(MemoryPrincipalRepo::new())
        }
    };

    let tokens = TokenIssuer::from_settings(&config.jwt, config.access_token_ttl_seconds)?;
    let auth = Arc::new(AuthService::new(principals, tokens));

    Ok(AppState::new(auth))
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(api::handlers::health::health))
        .nest("/auth", api::routes::routes(state.clone()))
        .with_state(state);

    http::apply(router, HttpLimits::default())
}
