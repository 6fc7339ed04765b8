//! Spawns the Authentication service on an ephemeral port with an
//! in-memory principal store.

#![allow(dead_code)]

use std::sync::Arc;

use auth::repos::MemoryPrincipalRepo;
use auth::services::auth::{AuthService, TokenIssuer};
use auth::{AppState, build_router};
use reqwest::Client;
use serde_json::json;
use shared::config::JwtSettings;
use tokio::net::TcpListener;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: TEST_SECRET.to_string(),
        issuer: "campus-auth".to_string(),
        audience: "campus-api".to_string(),
        leeway_seconds: 0,
    }
}

pub struct TestApp {
    pub client: Client,
    pub base_url: String,
    pub state: AppState,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let tokens = TokenIssuer::from_settings(&jwt_settings(), 3_600)
            .expect("token issuer");
        let auth = AuthService::new(Arc::new(MemoryPrincipalRepo::new()), tokens);
        let state = AppState::new(Arc::new(auth));
        let app = build_router(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/auth/register"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to send register request")
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/auth/login"))
            .query(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to send login request")
    }

    pub async fn validate(&self, token: &str) -> reqwest::Response {
        self.client
            .get(self.url("/auth/validate-token"))
            .query(&[("token", token)])
            .send()
            .await
            .expect("Failed to send validate request")
    }

    /// Register then log in, returning the token.
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        assert_eq!(self.register(username, password).await.status().as_u16(), 200);
        let res = self.login(username, password).await;
        assert_eq!(res.status().as_u16(), 200);
        res.text().await.unwrap()
    }
}
