/*
 * Responsibility
 * - students テーブル向け SQLx 操作
 */
use async_trait::async_trait;
use sqlx::PgPool;

use crate::repos::error::RepoResult;
use crate::repos::student_repo::{StudentRepo, StudentRow};

#[derive(Clone, Debug)]
pub struct PgStudentRepo {
    pool: PgPool,
}

impl PgStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> RepoResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
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
impl StudentRepo for PgStudentRepo {
    async fn list(&self) -> RepoResult<Vec<StudentRow>> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, name: &str, email: &str) -> RepoResult<StudentRow> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: i64) -> RepoResult<Option<StudentRow>> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, name: &str, email: &str) -> RepoResult<Option<StudentRow>> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            UPDATE students
            SET name = $2, email = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
