//! Integration Test: request/response dump reaches the log output

use modeldeck::{get_endpoint_uri, logging, PlatformClient};
use serde_json::json;
use tracing_subscriber::{fmt, layer::SubscriberExt};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::logs::CapturedLogs;
use crate::support::platform::{config_for, endpoint_json};

async fn run_exchange(dump: bool) -> (Option<String>, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/endpoints"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([endpoint_json(1, 2, 3, "debug.uri")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let logs = CapturedLogs::default();
    // 環境変数に依存しないよう、ベースは明示的に info
    let subscriber = tracing_subscriber::registry()
        .with(logging::env_filter(Some("info"), dump))
        .with(fmt::layer().with_ansi(false).with_writer(logs.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut config = config_for(&server).with_api_key("sk_test");
    config.debug = dump;
    let client = PlatformClient::new(&config).unwrap();

    let uri = get_endpoint_uri(&client, 2, 3).await.unwrap();
    (uri, logs.contents())
}

#[tokio::test]
async fn test_dump_is_emitted_at_info_base_level() {
    let (uri, output) = run_exchange(true).await;

    assert_eq!(uri.as_deref(), Some("debug.uri"));
    assert!(output.contains("---------------- request ----------------"));
    assert!(output.contains("GET "));
    assert!(output.contains("/api/v1/endpoints?model_id=2&version_id=3&is_active=true"));
    assert!(output.contains("---------------- response ----------------"));
    assert!(output.contains("200 OK"));
    assert!(output.contains("debug.uri"));
    assert!(!output.contains("sk_test"));
}

#[tokio::test]
async fn test_no_dump_when_disabled() {
    let (uri, output) = run_exchange(false).await;

    assert_eq!(uri.as_deref(), Some("debug.uri"));
    assert!(!output.contains("---------------- request ----------------"));
}
