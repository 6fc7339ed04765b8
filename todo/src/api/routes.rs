use axum::{
    Router,
    routing::{get, post},
};
use shared::middleware::auth::access;

use crate::api::handlers::todos::{create_todo, delete_todo, get_todo, list_todos, update_todo};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/api/todo", post(create_todo))
        .route(
            "/api/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos", get(list_todos));

    // Authentication only; todo items have no owner.
    let router = match state.verifier.clone() {
        Some(verifier) => access::apply(router, verifier),
        None => router,
    };

    router.with_state(state)
}
