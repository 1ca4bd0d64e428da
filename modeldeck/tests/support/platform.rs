use std::time::Duration;

use modeldeck::config::PlatformConfig;
use modeldeck::PlatformClient;
use serde_json::{json, Value};
use wiremock::MockServer;

/// プラットフォームのモックサーバーに向けたクライアントを作成する
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> PlatformClient {
    PlatformClient::new(&config_for(server)).expect("client should build")
}

/// モックサーバー向けの設定（APIキーなし、タイムアウト短め）
#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> PlatformConfig {
    PlatformConfig {
        api_host: server.uri(),
        api_key: None,
        timeout: Duration::from_secs(5),
        debug: false,
    }
}

/// エンドポイント一覧レスポンスの1件分
#[allow(dead_code)]
pub fn endpoint_json(id: u64, model_id: u64, version_id: u64, uri: &str) -> Value {
    json!({
        "id": id,
        "size": "S",
        "is_active": true,
        "model_id": model_id,
        "version_id": version_id,
        "uri": uri
    })
}
