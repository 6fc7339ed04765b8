/*
 * Responsibility
 * - TodoItem の request/response DTO (JSON は camelCase)
 * - id / createdAt / updatedAt はサーバ側で決める (body にあっても無視)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::TodoRow;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRequest {
    #[serde(default)]
    pub description: String,
    // null or missing => false
    #[serde(default)]
    pub is_complete: Option<bool>,
}

impl TodoRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.description.trim().is_empty() {
            return Err("description is required");
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete.unwrap_or(false)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i64,
    pub description: String,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoRow> for TodoResponse {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            is_complete: row.is_complete,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
