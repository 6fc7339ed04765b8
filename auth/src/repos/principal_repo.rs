/*
 * Responsibility
 * - principals テーブルの行型と、repo が上位に見せるインターフェース
 * - 実装は postgres.rs (本番) と memory.rs (DATABASE_URL 無しの開発 / テスト)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PrincipalRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Principals are created at registration and never mutated or deleted.
#[async_trait]
pub trait PrincipalRepo: Send + Sync + 'static {
    // Returns `RepoError::Conflict` when the username is taken.
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> RepoResult<PrincipalRow>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<PrincipalRow>>;
}
