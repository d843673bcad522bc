//! Tests for the HTTP transport module

use super::*;
use pretty_assertions::assert_eq;
use reqwest::Method;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("apbook-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("userId", "u1")
        .query_opt("cursor", Some("abc"))
        .query_opt("absent", None::<String>)
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"key": "value"}))
        .bearer("tok")
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("userId"), Some(&"u1".to_string()));
    assert_eq!(config.query.get("cursor"), Some(&"abc".to_string()));
    assert!(!config.query.contains_key("absent"));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.bearer.as_deref(), Some("tok"));
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[tokio::test]
async fn test_get_resolves_against_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/get-all-tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "t1", "name": "sports"}
        ])))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.get("/posts/get-all-tags", RequestConfig::new()).await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_query_params_and_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts/feed"))
        .and(query_param("userId", "u1"))
        .and(query_param("limit", "10"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "posts": [], "nextCursor": null
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get(
            "/posts/feed",
            RequestConfig::new()
                .query("userId", "u1")
                .query("limit", "10")
                .bearer("tok-123"),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_unauthenticated_request_has_no_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client.get("/public", RequestConfig::new()).await.unwrap();
    assert_eq!(response.status(), 200);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_rejected_response_becomes_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("/missing", RequestConfig::new()).await.unwrap_err();
    assert!(matches!(
        err,
        crate::error::Error::Status { status: 404, .. }
    ));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_unreachable_server_becomes_network_error() {
    // Nothing listens on this port.
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_millis(500))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("/anything", RequestConfig::new()).await.unwrap_err();
    assert!(matches!(err, crate::error::Error::Network(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_request_json_parses_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let data: serde_json::Value = client
        .request_json(Method::GET, "/data", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_full_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .get(&format!("{}/elsewhere", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
