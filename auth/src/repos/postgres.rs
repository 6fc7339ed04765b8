use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::error::{RepoError, RepoResult};
use crate::repos::principal_repo::{PrincipalRepo, PrincipalRow};

#[derive(Clone, Debug)]
pub struct PgPrincipalRepo {
    pool: PgPool,
}

impl PgPrincipalRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Create the table when missing. No migrations beyond this.
    pub async fn ensure_schema(&self) -> RepoResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS principals (
                id BIGSERIAL PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PrincipalRepo for PgPrincipalRepo {
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> RepoResult<PrincipalRow> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            INSERT INTO principals (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<PrincipalRow>> {
        let row = sqlx::query_as::<_, PrincipalRow>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM principals
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
