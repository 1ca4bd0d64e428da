//! ワークスペース型定義

use serde::{Deserialize, Serialize};

/// ワークスペース
///
/// 呼び出し元の現在の作業コンテキスト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    /// 状態
    pub status: String,
    /// ベースURL
    pub url: String,
}
