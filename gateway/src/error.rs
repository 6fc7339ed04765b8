use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no service owns this path")]
    NotFound,
    #[error("upstream {0} unavailable")]
    BadGateway(&'static str),
    #[error("upstream {0} timed out")]
    Timeout(&'static str),
    #[error("request body rejected")]
    PayloadTooLarge,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            GatewayError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            GatewayError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "BAD_GATEWAY"),
            GatewayError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "GATEWAY_TIMEOUT"),
            GatewayError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
        };

        ErrorResponse::new(code, self.to_string()).with_status(status)
    }
}
