//! Todo CRUD over HTTP.

mod common;

use std::sync::Arc;

use common::TestApp;
use serde_json::{Value, json};
use shared::config::JwtSettings;
use shared::services::verifier::LocalTokenVerifier;
use shared::{TokenVerifier, VerifiedPrincipal, VerifyError};

// ============================================================================
// Create / Read
// ============================================================================

#[tokio::test]
async fn create_sets_server_fields_and_defaults_incomplete() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let body = app.create("buy milk").await;

    // Assert
    assert_eq!(body["id"], 1);
    assert_eq!(body["description"], "buy milk");
    assert_eq!(body["isComplete"], false);
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn create_with_blank_description_returns_400() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(app.url("/api/todo"))
        .json(&json!({ "description": "   ", "isComplete": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION");
}

#[tokio::test]
async fn get_unknown_todo_returns_404() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/api/todo/5").await.status().as_u16(), 404);
}

#[tokio::test]
async fn list_is_ordered_by_id() {
    // Arrange
    let app = TestApp::spawn().await;
    for d in ["first", "second", "third"] {
        app.create(d).await;
    }

    // Act
    let list: Vec<Value> = app.get("/api/todos").await.json().await.unwrap();

    // Assert
    let ids: Vec<i64> = list.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn put_copies_description_and_flag() {
    // Arrange
    let app = TestApp::spawn().await;
    let created = app.create("draft").await;

    // Act
    let res = app
        .client
        .put(app.url("/api/todo/1"))
        .json(&json!({ "description": "final", "isComplete": true }))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["description"], "final");
    assert_eq!(body["isComplete"], true);
    assert_eq!(body["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn put_unknown_todo_returns_404() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .put(app.url("/api/todo/9"))
        .json(&json!({ "description": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 404);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_nonexistent_todo_returns_404() {
    let app = TestApp::spawn().await;

    let res = app.delete("/api/todo/42").await;

    assert_eq!(res.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_existing_returns_204_then_get_404() {
    // Arrange
    let app = TestApp::spawn().await;
    app.create("temporary").await;

    // Act
    let deleted = app.delete("/api/todo/1").await;
    let after = app.get("/api/todo/1").await;

    // Assert
    assert_eq!(deleted.status().as_u16(), 204);
    assert_eq!(after.status().as_u16(), 404);
}

// ============================================================================
// Optional authentication
// ============================================================================

#[tokio::test]
async fn gated_mode_requires_bearer_token() {
    // Arrange
    let settings = JwtSettings {
        secret: "todo-gate-test-secret-0123456789abcdef".to_string(),
        issuer: "campus-auth".to_string(),
        audience: "campus-api".to_string(),
        leeway_seconds: 0,
    };
    let app = TestApp::spawn_with(Some(Arc::new(LocalTokenVerifier::from_settings(&settings)))).await;

    // Act
    let anonymous = app.get("/api/todos").await;
    let forged = app
        .client
        .get(app.url("/api/todos"))
        .bearer_auth("not-a-jwt")
        .send()
        .await
        .unwrap();
    let health = app.get("/health").await;

    // Assert
    assert_eq!(anonymous.status().as_u16(), 401);
    assert_eq!(forged.status().as_u16(), 401);
    assert_eq!(health.status().as_u16(), 200);
}

struct FixedVerifier;

#[async_trait::async_trait]
impl TokenVerifier for FixedVerifier {
    fn backend_name(&self) -> &'static str {
        "fixed"
    }

    async fn verify(&self, token: &str) -> Result<VerifiedPrincipal, VerifyError> {
        if token == "letmein" {
            Ok(VerifiedPrincipal {
                principal_id: 1,
                username: None,
                role: None,
                jti: None,
                expires_at: None,
            })
        } else {
            Err(VerifyError::Rejected)
        }
    }
}

#[tokio::test]
async fn gated_mode_accepts_verified_token() {
    // Arrange
    let app = TestApp::spawn_with(Some(Arc::new(FixedVerifier))).await;

    // Act
    let res = app
        .client
        .post(app.url("/api/todo"))
        .bearer_auth("letmein")
        .json(&json!({ "description": "behind the gate" }))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(res.status().as_u16(), 201);
}
