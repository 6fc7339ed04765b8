//! Gateway routing and forwarding against stub upstreams.

mod common;

use std::time::Duration;

use common::{TestGateway, dead_upstream, spawn_upstream};
use serde_json::{Value, json};

#[tokio::test]
async fn health_is_answered_locally() {
    // Arrange: every upstream is down
    let dead = dead_upstream();
    let gw = TestGateway::spawn(&dead, &dead, &dead, Duration::from_secs(1)).await;

    // Act
    let res = gw.client.get(gw.url("/health")).send().await.unwrap();

    // Assert
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_prefix_returns_404() {
    let gw = TestGateway::spawn_default().await;

    let res = gw.client.get(gw.url("/nowhere/1")).send().await.unwrap();

    assert_eq!(res.status().as_u16(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn each_prefix_reaches_its_service() {
    let gw = TestGateway::spawn_default().await;

    for (path, expected) in [
        ("/auth/validate-token", "auth"),
        ("/api/students/1", "student"),
        ("/students/profile/1", "student"),
        ("/api/todo/1", "todo"),
        ("/api/todos", "todo"),
    ] {
        let res = gw.client.get(gw.url(path)).send().await.unwrap();
        assert_eq!(res.status().as_u16(), 200, "{path}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["upstream"], expected, "{path}");
        assert_eq!(body["path"], path);
    }
}

#[tokio::test]
async fn method_query_headers_and_body_are_forwarded() {
    // Arrange
    let gw = TestGateway::spawn_default().await;

    // Act
    let res = gw
        .client
        .post(gw.url("/auth/login?username=ann&password=pw"))
        .bearer_auth("abc")
        .header("proxy-authorization", "Basic c2VjcmV0")
        .json(&json!({ "k": "v" }))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(res.status().as_u16(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["query"], "username=ann&password=pw");
    assert_eq!(body["authorization"], "Bearer abc");
    assert!(body["proxy_authorization"].is_null());
    assert!(body["request_id"].is_string());
    assert_eq!(body["body"], r#"{"k":"v"}"#);
}

#[tokio::test]
async fn upstream_status_and_headers_pass_through() {
    let gw = TestGateway::spawn_default().await;

    let res = gw
        .client
        .get(gw.url("/api/students/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 404);
    assert_eq!(res.headers()["x-upstream"], "student");
}

#[tokio::test]
async fn unreachable_upstream_returns_502() {
    // Arrange
    let auth = spawn_upstream("auth").await;
    let student = spawn_upstream("student").await;
    let gw = TestGateway::spawn(&auth, &student, &dead_upstream(), Duration::from_secs(1)).await;

    // Act
    let res = gw.client.get(gw.url("/api/todos")).send().await.unwrap();

    // Assert
    assert_eq!(res.status().as_u16(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_GATEWAY");
}

#[tokio::test]
async fn slow_upstream_returns_504() {
    // Arrange
    let up = spawn_upstream("student").await;
    let gw = TestGateway::spawn(&up, &up, &up, Duration::from_millis(300)).await;

    // Act
    let res = gw.client.get(gw.url("/api/students/slow")).send().await.unwrap();

    // Assert
    assert_eq!(res.status().as_u16(), 504);
}
