use std::sync::Arc;

use shared::SharedVerifier;

use crate::repos::TodoRepo;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepo>,
    // Some => every /api/todo* route requires a verified bearer token
    pub verifier: Option<SharedVerifier>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepo>, verifier: Option<SharedVerifier>) -> Self {
        Self { todos, verifier }
    }
}
