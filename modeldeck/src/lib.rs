//! modeldeck
//!
//! MLデプロイメントプラットフォームのエンドポイント/ワークスペース参照ユーティリティ

#![warn(missing_docs)]

/// 共通型定義（エラー型）
pub mod common;

/// 型定義
pub mod types;

/// プラットフォームAPIクライアント
pub mod client;

/// エンドポイントURI・ワークスペースURI取得、JSON読み込み
pub mod utils;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

pub use client::{EndpointLister, PlatformClient, WorkspaceFetcher};
pub use common::error::{PlatformError, ReadJsonError};
pub use utils::{get_endpoint_uri, get_workspace_uri, read_json, read_json_as};
