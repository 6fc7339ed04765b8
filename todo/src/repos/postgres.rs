/*
 * Responsibility
 * - todo_items テーブル向け SQLx 操作
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::error::RepoResult;
use crate::repos::todo_repo::{TodoRepo, TodoRow};

#[derive(Clone, Debug)]
pub struct PgTodoRepo {
    pool: PgPool,
}

impl PgTodoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> RepoResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todo_items (
                id BIGSERIAL PRIMARY KEY,
                description TEXT NOT NULL,
                is_complete BOOLEAN NOT NULL DEFAULT false,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TodoRepo for PgTodoRepo {
    async fn list(&self) -> RepoResult<Vec<TodoRow>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, description, is_complete, created_at, updated_at
            FROM todo_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, description: &str, is_complete: bool) -> RepoResult<TodoRow> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todo_items (description, is_complete)
            VALUES ($1, $2)
            RETURNING id, description, is_complete, created_at, updated_at
            "#,
        )
        .bind(description)
        .bind(is_complete)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: i64) -> RepoResult<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, description, is_complete, created_at, updated_at
            FROM todo_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        description: &str,
        is_complete: bool,
    ) -> RepoResult<Option<TodoRow>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todo_items
            SET description = $2, is_complete = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, description, is_complete, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(description)
        .bind(is_complete)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM todo_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
