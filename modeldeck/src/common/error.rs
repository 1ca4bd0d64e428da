//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! このレイヤーはエラーをリトライ・変換せず、そのまま呼び出し元へ返す。

use std::path::PathBuf;
use thiserror::Error;

/// Error type for platform API calls
#[derive(Debug, Error)]
pub enum PlatformError {
    /// HTTP request failed (connection, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Platform returned a non-success response
    #[error("Platform returned error: {status} - {message}")]
    EndpointError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body could not be decoded
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlatformError {
    /// Returns true when the failure happened in the transport layer
    /// rather than as an answer from the platform.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// HTTP status code, if the platform answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::EndpointError { status, .. } => Some(*status),
            Self::InvalidResponse(_) | Self::Config(_) => None,
        }
    }
}

/// Error type for reading JSON files from disk
#[derive(Debug, Error)]
pub enum ReadJsonError {
    /// File does not exist
    #[error("File not found: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// Any other I/O failure while opening or reading the file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON (or do not match the requested type)
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// Requested path
        path: PathBuf,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },
}

impl ReadJsonError {
    /// I/O open/read failures are classified by kind so that a missing file
    /// stays distinguishable from permission or device errors.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns true for the file-not-found case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
