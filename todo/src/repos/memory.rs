use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::repos::error::RepoResult;
use crate::repos::todo_repo::{TodoRepo, TodoRow};

/// In-process store used when no database is configured.
/// BTreeMap keeps `list` ordered by id.
#[derive(Debug, Default)]
pub struct MemoryTodoRepo {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, TodoRow>,
}

impl MemoryTodoRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepo for MemoryTodoRepo {
    async fn list(&self) -> RepoResult<Vec<TodoRow>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn create(&self, description: &str, is_complete: bool) -> RepoResult<TodoRow> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let now = Utc::now();
        let row = TodoRow {
            id: inner.last_id,
            description: description.to_string(),
            is_complete,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(row.id, row.clone());

        Ok(row)
    }

    async fn get(&self, id: i64) -> RepoResult<Option<TodoRow>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        description: &str,
        is_complete: bool,
    ) -> RepoResult<Option<TodoRow>> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };

        row.description = description.to_string();
        row.is_complete = is_complete;
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
    async fn list_is_ordered_by_id() {
        let repo = MemoryTodoRepo::new();
        for d in ["c", "a", "b"] {
            repo.create(d, false).await.unwrap();
        }

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let repo = MemoryTodoRepo::new();
        let t = repo.create("write tests", false).await.unwrap();

        let u = repo.update(t.id, "write more tests", true).await.unwrap().unwrap();
        assert_eq!(u.created_at, t.created_at);
        assert!(u.is_complete);
        assert!(u.updated_at >= t.updated_at);
    }
}
