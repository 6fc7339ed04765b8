use axum::{Router, routing::get};
use shared::middleware::auth::access;

use crate::api::handlers::{
    profile::get_profile,
    students::{create_student, delete_student, get_student, list_students, update_student},
};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let crud = Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        );

    // Only the profile route sits behind token verification.
    let profile = access::apply(
        Router::new().route("/students/profile/{id}", get(get_profile)),
        state.verifier.clone(),
    );

    crud.merge(profile).with_state(state)
}
