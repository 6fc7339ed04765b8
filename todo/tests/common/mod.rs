//! Spawns the todo service on an ephemeral port with an in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use reqwest::Client;
use serde_json::{Value, json};
use shared::SharedVerifier;
use todo::repos::MemoryTodoRepo;
use todo::{AppState, build_router};
use tokio::net::TcpListener;

pub struct TestApp {
    pub client: Client,
    pub base_url: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(None).await
    }

    pub async fn spawn_with(verifier: Option<SharedVerifier>) -> Self {
        let state = AppState::new(Arc::new(MemoryTodoRepo::new()), verifier);
        let app = build_router(state);

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
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create(&self, description: &str) -> Value {
        let res = self
            .client
            .post(self.url("/api/todo"))
            .json(&json!({ "description": description }))
            .send()
            .await
            .expect("Failed to send POST request");
        assert_eq!(res.status().as_u16(), 201);
        res.json().await.unwrap()
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request")
    }
}
