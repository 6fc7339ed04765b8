/*
 * Responsibility
 * - todo_items テーブルの行型と repo インターフェース
 * - 実装は postgres.rs / memory.rs
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TodoRow {
    pub id: i64,
    pub description: String,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait TodoRepo: Send + Sync + 'static {
    // Ordered by id.
    async fn list(&self) -> RepoResult<Vec<TodoRow>>;

    async fn create(&self, description: &str, is_complete: bool) -> RepoResult<TodoRow>;

    async fn get(&self, id: i64) -> RepoResult<Option<TodoRow>>;

    async fn update(
        &self,
        id: i64,
        description: &str,
        is_complete: bool,
    ) -> RepoResult<Option<TodoRow>>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
