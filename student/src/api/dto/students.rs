/*
 * Responsibility
 * - Students の request/response DTO
 * - validate() で形式チェック
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::StudentRow;

/// Body of both `POST` and `PUT`. PUT replaces every field.
#[derive(Debug, Deserialize)]
pub struct StudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl StudentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if !self.email.contains('@') {
            return Err("email must contain '@'");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<StudentRow> for StudentResponse {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, email: &str) -> StudentRequest {
        StudentRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn validation() {
        assert!(req("Ann", "ann@example.com").validate().is_ok());
        assert!(req(" ", "ann@example.com").validate().is_err());
        assert!(req("Ann", "ann.example.com").validate().is_err());
    }
}
