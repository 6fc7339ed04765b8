use axum::{
    Json,
    body::Body,
    extract::{Request, State},
    response::Response,
};
use serde_json::{Value, json};

use crate::error::GatewayError;
use crate::state::GatewayState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback handler: everything that is not `/health` is proxied.
pub async fn route_request(
    State(state): State<GatewayState>,
    request: Request<Body>,
) -> Result<Response<Body>, GatewayError> {
    let path = request.uri().path().to_string();

    let Some(upstream) = state.routes.resolve(&path) else {
        tracing::debug!(path = %path, "no upstream for path");
        return Err(GatewayError::NotFound);
    };
    let base = state.upstreams.base_url(upstream);

    state
        .client
        .forward(base, request)
        .await
        .map_err(|e| {
            let err = classify(upstream.name(), &e);
            tracing::warn!(
                service = upstream.name(),
                service_url = %base,
                path = %path,
                error = %e,
                "failed to forward request"
            );
            err
        })
}

fn classify(service: &'static str, err: &anyhow::Error) -> GatewayError {
    if let Some(e) = err.chain().find_map(|c| c.downcast_ref::<reqwest::Error>()) {
        if e.is_timeout() {
            return GatewayError::Timeout(service);
        }
        return GatewayError::BadGateway(service);
    }
    if err.chain().any(|c| c.is::<axum::Error>()) {
        return GatewayError::PayloadTooLarge;
    }
    GatewayError::BadGateway(service)
}
