use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::repos::error::{RepoError, RepoResult};
use crate::repos::principal_repo::{PrincipalRepo, PrincipalRow};

/// In-process principal store.
///
/// Same contract as `PgPrincipalRepo`: ids start at 1 and never repeat,
/// usernames are unique.
#[derive(Debug, Default)]
pub struct MemoryPrincipalRepo {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, PrincipalRow>,
}

impl MemoryPrincipalRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrincipalRepo for MemoryPrincipalRepo {
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> RepoResult<PrincipalRow> {
        let mut inner = self.inner.write().await;

        if inner.rows.values().any(|p| p.username == username) {
            return Err(RepoError::Conflict);
        }

        inner.last_id += 1;
        let row = PrincipalRow {
            id: inner.last_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        };
        inner.rows.insert(row.id, row.clone());

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<PrincipalRow>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().find(|p| p.username == username).cloned())
    }
}
