//! エンドポイント型定義
//!
//! プラットフォーム上にデプロイされたモデルバージョンのエンドポイント

use serde::{Deserialize, Serialize};

/// エンドポイントのサービスサイズ
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EndpointSize {
    /// Small（デフォルト）
    #[default]
    S,
    /// Medium
    M,
    /// Large
    L,
    /// Extra large
    #[serde(rename = "XL")]
    Xl,
}

impl EndpointSize {
    /// EndpointSizeを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

impl std::fmt::Display for EndpointSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// エンドポイント
///
/// プラットフォームが所有し、このレイヤーからは読み取り専用。
/// 未知のフィールドは無視される。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// エンドポイントID
    pub id: u64,
    /// サービスサイズ
    pub size: EndpointSize,
    /// 稼働中フラグ
    pub is_active: bool,
    /// モデルID
    pub model_id: u64,
    /// バージョンID
    pub version_id: u64,
    /// 推論リクエスト先URI
    pub uri: String,
}

/// エンドポイント一覧
///
/// JSON上は素の配列。順序はプラットフォームが返した順序のまま保持する。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct EndpointsList {
    /// 一覧本体
    pub root: Vec<Endpoint>,
}

impl EndpointsList {
    /// 一覧を作成
    pub fn new(root: Vec<Endpoint>) -> Self {
        Self { root }
    }

    /// 件数
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// 返却順で先頭のエンドポイント
    pub fn first(&self) -> Option<&Endpoint> {
        self.root.first()
    }
}

/// エンドポイント一覧取得のフィルタ（クエリパラメータ）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointListParams {
    /// モデルID
    pub model_id: u64,
    /// バージョンID
    pub version_id: u64,
    /// 稼働中のみ
    pub is_active: bool,
}

impl EndpointListParams {
    /// 稼働中エンドポイントのみを対象にしたフィルタを作成
    pub fn active(model_id: u64, version_id: u64) -> Self {
        Self {
            model_id,
            version_id,
            is_active: true,
        }
    }
}
