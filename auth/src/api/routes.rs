use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::auth::{login, register, validate_token};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/validate-token", get(validate_token))
        .with_state(state)
}
