/*
 * Responsibility
 * - 全サービス共通の JSON error body ({"error": {"code", "message"}})
 * - 認証 / 認可エラー (AuthError) の HTTP status への変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Failures of the token-verification and owner-guard flow.
///
/// Every verification failure (missing header, rejected token, issuer unreachable)
/// collapses into 401; only an owner mismatch is 403.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid or expired bearer token")]
    InvalidToken,

    #[error("forbidden")]
    Forbidden,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => "UNAUTHORIZED",
            AuthError::Forbidden => "FORBIDDEN",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        ErrorResponse::new(self.code(), self.to_string()).with_status(status)
    }
}
