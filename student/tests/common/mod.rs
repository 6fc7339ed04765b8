//! Test harness: a stub Token Issuer that counts verification calls, and the
//! student service spawned on an ephemeral port against it.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use shared::SharedVerifier;
use shared::services::verifier::HttpTokenVerifier;
use student::repos::MemoryStudentRepo;
use student::{AppState, build_router};
use tokio::net::TcpListener;

pub const VERIFY_TIMEOUT: Duration = Duration::from_millis(300);

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Stub issuer. `token-<n>` verifies as principal `n`, `slow` outlives the
/// client timeout, everything else is rejected.
#[derive(Clone, Default)]
pub struct StubIssuer {
    calls: Arc<AtomicUsize>,
}

impl StubIssuer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Deserialize)]
struct Params {
    token: Option<String>,
}

async fn validate(State(stub): State<StubIssuer>, Query(p): Query<Params>) -> Response {
    stub.calls.fetch_add(1, Ordering::SeqCst);

    let token = p.token.unwrap_or_default();
    if token == "slow" {
        tokio::time::sleep(Duration::from_secs(2)).await;
        return StatusCode::OK.into_response();
    }
    match token.strip_prefix("token-").and_then(|id| id.parse::<i64>().ok()) {
        Some(id) => Json(json!({
            "principal_id": id,
            "username": format!("user{id}"),
            "role": "USER",
            "expires_at": 4_102_444_800i64
        }))
        .into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

pub async fn spawn_stub_issuer() -> (String, StubIssuer) {
    let stub = StubIssuer::default();
    let app = Router::new()
        .route("/auth/validate-token", get(validate))
        .with_state(stub.clone());

    (serve(app).await, stub)
}

pub struct TestApp {
    pub client: Client,
    pub base_url: String,
}

impl TestApp {
    pub async fn spawn_with_verifier(verifier: SharedVerifier) -> Self {
        let state = AppState::new(Arc::new(MemoryStudentRepo::new()), verifier);
        let base_url = serve(build_router(state)).await;

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Student service whose verifier calls the given issuer over HTTP.
    pub async fn spawn(issuer_url: &str) -> Self {
        let verifier = HttpTokenVerifier::new(issuer_url, VERIFY_TIMEOUT)
            .expect("verifier");
        Self::spawn_with_verifier(Arc::new(verifier)).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_student(&self, name: &str, email: &str) -> Value {
        let res = self
            .client
            .post(self.url("/api/students"))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await
            .expect("Failed to send POST request");
        assert_eq!(res.status().as_u16(), 201);
        res.json().await.unwrap()
    }

    pub async fn get_profile(&self, id: i64, token: Option<&str>) -> reqwest::Response {
        let mut req = self.client.get(self.url(&format!("/students/profile/{id}")));
        if let Some(t) = token {
            req = req.bearer_auth(t);
        }
        req.send().await.expect("Failed to send GET request")
    }
}
