//! End-to-end tests against a running server.

use std::net::SocketAddr;
use std::time::Duration;

use keygate::config::ServerConfig;
use keygate::http::HttpServer;

/// Start the real server on an ephemeral port and return its address.
async fn start_server(api_key: Option<&str>) -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.auth.api_key = api_key.map(str::to_string);

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Wait for the accept loop to come up.
    tokio::time::sleep(Duration::from_millis(100)).await;

    addr
}

#[tokio::test]
async fn test_missing_key_returns_401() {
    let addr = start_server(Some("s3cret")).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 401);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "API Key required");
}

#[tokio::test]
async fn test_wrong_key_returns_401() {
    let addr = start_server(Some("s3cret")).await;
    let client = reqwest::Client::new();

    for bad_key in ["wrong", "", "S3CRET", "s3cre"] {
        let res = client
            .get(format!("http://{}/", addr))
            .header("X-API-Key", bad_key)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 401);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["detail"], "Invalid API Key");
    }
}

#[tokio::test]
async fn test_unset_secret_rejects_keyed_requests() {
    let addr = start_server(None).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .header("X-API-Key", "anything")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 401);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "Invalid API Key");
}

#[tokio::test]
async fn test_valid_key_returns_payload() {
    let addr = start_server(Some("s3cret")).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .header("X-API-Key", "s3cret")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "API Key OK & IP logged");
    assert_eq!(body["client_ip"], "127.0.0.1");
    assert_eq!(body["path"], "/");
}

#[tokio::test]
async fn test_forwarded_for_overrides_peer() {
    let addr = start_server(Some("s3cret")).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .header("X-API-Key", "s3cret")
        .header("X-Forwarded-For", "203.0.113.5, 10.0.0.2")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["client_ip"], "203.0.113.5");
}

#[tokio::test]
async fn test_forwarded_for_whitespace_is_stripped() {
    let addr = start_server(Some("s3cret")).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("http://{}/", addr))
        .header("X-API-Key", "s3cret")
        .header("X-Forwarded-For", "  198.51.100.7  , 10.0.0.9")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status().as_u16(), 200);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["client_ip"], "198.51.100.7");
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let addr = start_server(Some("s3cret")).await;
    let client = reqwest::Client::new();

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let res = client
            .get(format!("http://{}/", addr))
            .header("X-API-Key", "s3cret")
            .send()
            .await
            .unwrap();

        assert_eq!(res.status().as_u16(), 200);
        bodies.push(res.text().await.unwrap());
    }

    assert_eq!(bodies[0], bodies[1]);
}
