use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::Json;
use axum::http::HeaderMap;
use shared::middleware::auth::access::bearer_token;

use crate::api::dto::credentials::{LoginParams, RegisterRequest};
use crate::api::dto::validate::{ValidateTokenParams, ValidateTokenResponse};
use crate::error::AppError;
use crate::state::AppState;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<&'static str, AppError> {
    state.auth.register(&req.username, &req.password).await?;
    Ok(REGISTERED_MESSAGE)
}

/// Returns the bare token as `text/plain`.
///
/// Credentials come from the query string; a form-encoded body fills in
/// whatever the query left out.
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginParams>,
    form: Result<Form<LoginParams>, FormRejection>,
) -> Result<String, AppError> {
    let params = match form {
        Ok(Form(form)) => query.or(form),
        Err(_) => query,
    };
    let (Some(username), Some(password)) = (params.username, params.password) else {
        return Err(AppError::InvalidCredentials);
    };

    let issued = state.auth.login(&username, &password).await?;
    Ok(issued.access_token)
}

/// `?token=` wins; the Authorization header is accepted as a fallback.
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ValidateTokenParams>,
) -> Result<Json<ValidateTokenResponse>, AppError> {
    let token = match params.token.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => bearer_token(&headers)
            .map_err(|_| AppError::Unauthorized)?
            .to_string(),
    };

    let principal = state.auth.validate(&token)?;
    Ok(Json(principal.into()))
}
