//! Integration Test: get_workspace_uri over HTTP

use std::time::Duration;

use modeldeck::config::PlatformConfig;
use modeldeck::{get_workspace_uri, PlatformClient, PlatformError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::platform::{client_for, config_for};

#[tokio::test]
async fn test_get_workspace_uri_successful() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workspaces"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "test", "url": "test_url"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let workspace_uri = get_workspace_uri(&client).await.unwrap();

    assert_eq!(workspace_uri, "test_url");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_get_workspace_uri_request_exception() {
    // 何もlistenしていないポート
    let config = PlatformConfig {
        api_host: "http://127.0.0.1:1".to_string(),
        api_key: None,
        timeout: Duration::from_secs(2),
        debug: false,
    };
    let client = PlatformClient::new(&config).unwrap();

    let err = get_workspace_uri(&client).await.unwrap_err();

    assert!(err.is_request_error(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_get_workspace_uri_timeout_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workspaces"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "test", "url": "test_url"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.timeout = Duration::from_millis(200);
    let client = PlatformClient::new(&config).unwrap();

    let err = get_workspace_uri(&client).await.unwrap_err();

    match err {
        PlatformError::Http(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_workspace_uri_not_created() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workspaces"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Workspace not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = get_workspace_uri(&client).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_request_error());
}
