/*
 * Responsibility
 * - Config読み込み → ServiceClient / RouteTable 生成 → Router 組み立て
 * - HTTP middleware + CORS の適用 (ブラウザに面するのは gateway のみ)
 * - axum::serve() で起動
 */
use anyhow::{Context, Result};
use axum::{Router, routing::get};

use shared::config::AppEnv;
use shared::middleware::{
    cors,
    http::{self, HttpLimits},
};
use shared::telemetry;

use crate::config::Config;
use crate::handlers::{health, route_request};
use crate::routing::RouteTable;
use crate::service_client::ServiceClient;
use crate::state::GatewayState;

pub async fn run() -> Result<()> {
    telemetry::init_tracing("info,gateway=debug,tower_http=info");
    let config = Config::from_env()?;

    telemetry::init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        auth = %config.upstreams.auth,
        student = %config.upstreams.student,
        todo = %config.upstreams.todo,
        timeout_secs = config.upstream_timeout.as_secs(),
        "starting gateway in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    let app = build_router(state, config.app_env, &config.cors_allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_state(config: &Config) -> Result<GatewayState> {
    let client = ServiceClient::new(config.upstream_timeout)?;
    Ok(GatewayState::new(
        RouteTable::default(),
        config.upstreams.clone(),
        client,
    ))
}

pub fn build_router(state: GatewayState, app_env: AppEnv, allowed_origins: &[String]) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .fallback(route_request)
        .with_state(state);

    let router = http::apply(router, HttpLimits::default());
    cors::apply(router, app_env, allowed_origins)
}
