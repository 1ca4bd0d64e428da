//! 型定義モジュール

/// エンドポイント型定義
pub mod endpoint;

/// ワークスペース型定義
pub mod workspace;

pub use endpoint::{Endpoint, EndpointListParams, EndpointSize, EndpointsList};
pub use workspace::Workspace;
