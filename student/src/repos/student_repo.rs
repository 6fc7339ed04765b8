/*
 * Responsibility
 * - students テーブルの行型と repo インターフェース
 * - 実装は postgres.rs / memory.rs
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait StudentRepo: Send + Sync + 'static {
    async fn list(&self) -> RepoResult<Vec<StudentRow>>;

    async fn create(&self, name: &str, email: &str) -> RepoResult<StudentRow>;

    async fn get(&self, id: i64) -> RepoResult<Option<StudentRow>>;

    // None when the row does not exist.
    async fn update(&self, id: i64, name: &str, email: &str) -> RepoResult<Option<StudentRow>>;

    async fn delete(&self, id: i64) -> RepoResult<bool>;
}
