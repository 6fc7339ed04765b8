use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::repos::error::RepoResult;
use crate::repos::student_repo::{StudentRepo, StudentRow};

/// In-process store used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryStudentRepo {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, StudentRow>,
}

impl MemoryStudentRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepo for MemoryStudentRepo {
    async fn list(&self) -> RepoResult<Vec<StudentRow>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, name: &str, email: &str) -> RepoResult<StudentRow> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let now = Utc::now();
        let row = StudentRow {
            id: inner.last_id,
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());

        Ok(row)
    }

    async fn get(&self, id: i64) -> RepoResult<Option<StudentRow>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, name: &str, email: &str) -> RepoResult<Option<StudentRow>> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };

        row.name = name.to_string();
        row.email = email.to_string();
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = MemoryStudentRepo::new();
        let s = repo.create("Ann", "ann@example.com").await.unwrap();

        let updated = repo.update(s.id, "Anne", "anne@example.com").await.unwrap().unwrap();
        assert_eq!(updated.name, "Anne");
        assert!(updated.updated_at >= s.updated_at);

        assert!(repo.update(99, "x", "x@y").await.unwrap().is_none());
        assert!(repo.delete(s.id).await.unwrap());
        assert!(!repo.delete(s.id).await.unwrap());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = MemoryStudentRepo::new();
        let a = repo.create("A", "a@x").await.unwrap();
        repo.delete(a.id).await.unwrap();

        let b = repo.create("B", "b@x").await.unwrap();
        assert_eq!(b.id, 2);
    }
}
