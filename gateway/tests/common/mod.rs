//! Stub upstreams that echo what they received, and the gateway in front of them.

#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use gateway::config::{Upstreams, parse_upstream};
use gateway::routing::RouteTable;
use gateway::service_client::ServiceClient;
use gateway::{GatewayState, build_router};
use reqwest::Client;
use serde_json::json;
use shared::config::AppEnv;
use tokio::net::TcpListener;
use url::Url;

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

async fn echo(
    State(label): State<&'static str>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if uri.path().ends_with("/slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    let status = if uri.path().ends_with("/missing") {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    (
        status,
        [("x-upstream", label)],
        Json(json!({
            "upstream": label,
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "authorization": header("authorization"),
            "proxy_authorization": header("proxy-authorization"),
            "request_id": header("x-request-id"),
            "body": String::from_utf8_lossy(&body),
        })),
    )
        .into_response()
}

pub async fn spawn_upstream(label: &'static str) -> String {
    serve(Router::new().fallback(echo).with_state(label)).await
}

/// A base URL with nothing listening behind it.
pub fn dead_upstream() -> String {
    let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", l.local_addr().unwrap())
}

fn url(raw: &str) -> Url {
    parse_upstream(raw).expect("upstream url")
}

pub struct TestGateway {
    pub client: Client,
    pub base_url: String,
}

impl TestGateway {
    pub async fn spawn(auth: &str, student: &str, todo: &str, timeout: Duration) -> Self {
        let upstreams = Upstreams {
            auth: url(auth),
            student: url(student),
            todo: url(todo),
        };
        let state = GatewayState::new(
            RouteTable::default(),
            upstreams,
            ServiceClient::new(timeout).unwrap(),
        );
        let base_url = serve(build_router(state, AppEnv::Development, &[])).await;

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// All three upstreams alive.
    pub async fn spawn_default() -> Self {
        let auth = spawn_upstream("auth").await;
        let student = spawn_upstream("student").await;
        let todo = spawn_upstream("todo").await;
        Self::spawn(&auth, &student, &todo, Duration::from_secs(5)).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
