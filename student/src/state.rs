/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use shared::SharedVerifier;

use crate::repos::StudentRepo;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepo>,
    pub verifier: SharedVerifier,
}

impl AppState {
    pub fn new(students: Arc<dyn StudentRepo>, verifier: SharedVerifier) -> Self {
        Self { students, verifier }
    }
}
