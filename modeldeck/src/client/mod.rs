//! プラットフォームAPIクライアント
//!
//! リモート呼び出しをtraitで抽象化し、テストダブルに差し替え可能にする。
//! 本番実装は [`PlatformClient`]（reqwest）。

/// リクエスト/レスポンスのデバッグ出力
pub mod debug;
/// reqwest実装
pub mod http;

use async_trait::async_trait;

use crate::common::error::PlatformError;
use crate::types::{EndpointListParams, EndpointsList, Workspace};

pub use http::PlatformClient;

// ---------------------------------------------------------------------------
// EndpointLister
// ---------------------------------------------------------------------------

/// エンドポイント一覧取得
#[async_trait]
pub trait EndpointLister: Send + Sync {
    /// フィルタに一致するエンドポイントを返却順のまま取得
    async fn list_endpoints(
        &self,
        params: &EndpointListParams,
    ) -> Result<EndpointsList, PlatformError>;
}

// ---------------------------------------------------------------------------
// WorkspaceFetcher
// ---------------------------------------------------------------------------

/// 現在のワークスペース取得
#[async_trait]
pub trait WorkspaceFetcher: Send + Sync {
    /// 呼び出し元のアクティブなワークスペースを取得
    async fn get_workspace(&self) -> Result<Workspace, PlatformError>;
}
