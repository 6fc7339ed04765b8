/*
 * Responsibility
 * - Config読み込み → 依存生成 (student store / TokenVerifier) → Router 組み立て
 * - HTTP middleware の適用
 * - axum::serve() で起動
 */
use axum::{Router, routing::get};
use std::sync::Arc;

use shared::middleware::http::{self, HttpLimits};
use shared::services::verifier::build_token_verifier;
use shared::telemetry;

use crate::api;
use crate::config::Config;
use crate::error::AppError;
use crate::repos::{MemoryStudentRepo, PgStudentRepo, StudentRepo};
use crate::state::AppState;

pub async fn run() -> Result<(), AppError> {
    telemetry::init_tracing("info,student=debug,shared=info,tower_http=info");
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting student service in {:?} mode on {}",
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
    let students: Arc<dyn StudentRepo> = match &config.database_url {
        Some(url) => {
            let pool = shared::db::connect(url).await.map_err(|e| {
                tracing::error!(error = %e, "failed to connect to database");
                AppError::Internal
            })?;
            let repo = PgStudentRepo::new(pool);
            repo.ensure_schema().await?;
            Arc::new(repo)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; students are kept in memory");
            Arc::new(MemoryStudentRepo::new())
        }
    };

    let verifier = build_token_verifier(&config.verifier)?;
    tracing::info!(backend = verifier.backend_name(), "token verifier ready");

    Ok(AppState::new(students, verifier))
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(api::handlers::health::health))
        .merge(api::routes::routes(state.clone()))
        .with_state(state);

    http::apply(router, HttpLimits::default())
}
