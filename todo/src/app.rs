/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
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
use crate::repos::{MemoryTodoRepo, PgTodoRepo, TodoRepo};
use crate::state::AppState;

pub async fn run() -> Result<(), AppError> {
    telemetry::init_tracing("info,todo=debug,shared=info,tower_http=info");
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting todo service in {:?} mode on {}",
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
    let todos: Arc<dyn TodoRepo> = match &config.database_url {
        Some(url) => {
            let pool = shared::db::connect(url).await.map_err(|e| {
                tracing::error!(error = %e, "failed to connect to database");
                AppError::Internal
            })?;
            let repo = PgTodoRepo::new(pool);
            repo.ensure_schema().await?;
            Arc::new(repo)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; todo items are kept in memory");
            Arc::new(MemoryTodoRepo::new())
        }
    };

    let verifier = match &config.verifier {
        Some(settings) => {
            let v = build_token_verifier(settings)?;
            tracing::info!(backend = v.backend_name(), "todo routes require a bearer token");
            Some(v)
        }
        None => None,
    };

    Ok(AppState::new(todos, verifier))
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(api::handlers::health::health))
        .merge(api::routes::routes(state.clone()))
        .with_state(state);

    http::apply(router, HttpLimits::default())
}
