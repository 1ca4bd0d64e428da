//! エンドポイントURI・ワークスペースURI取得、JSON読み込み
//!
//! 各関数はステートレスで、リモート呼び出しは1回のみ。
//! エラーはリトライも変換もせず呼び出し元へ返す。

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::client::{EndpointLister, WorkspaceFetcher};
use crate::common::error::{PlatformError, ReadJsonError};
use crate::types::EndpointListParams;

/// Get the deployment URI associated with a specific model and version
///
/// Only active endpoints are requested. When several match, the first one in
/// the order the platform returned wins.
///
/// # Arguments
/// * `lister` - Endpoint listing capability
/// * `model_id` - Model ID
/// * `version_id` - Version ID
///
/// # Returns
/// `Ok(None)` when no active endpoint exists for the model version
pub async fn get_endpoint_uri<L>(
    lister: &L,
    model_id: u64,
    version_id: u64,
) -> Result<Option<String>, PlatformError>
where
    L: EndpointLister + ?Sized,
{
    let params = EndpointListParams::active(model_id, version_id);
    let endpoints = lister.list_endpoints(&params).await?;

    let Some(first) = endpoints.first() else {
        tracing::debug!(model_id, version_id, "No active endpoint found");
        return Ok(None);
    };

    if endpoints.len() > 1 {
        tracing::warn!(
            model_id,
            version_id,
            matches = endpoints.len(),
            endpoint_id = first.id,
            size = %first.size,
            "Multiple active endpoints found, using the first one"
        );
    }

    Ok(Some(first.uri.clone()))
}

/// Retrieve the URL of the current workspace
///
/// # Returns
/// The workspace URL, or the platform error unchanged
pub async fn get_workspace_uri<F>(fetcher: &F) -> Result<String, PlatformError>
where
    F: WorkspaceFetcher + ?Sized,
{
    match fetcher.get_workspace().await {
        Ok(workspace) => Ok(workspace.url),
        Err(e) => {
            tracing::error!("Failed to retrieve workspace: {}", e);
            tracing::error!("Please check that you have created a workspace on the platform");
            Err(e)
        }
    }
}

/// Read the JSON file at `path`
///
/// Any well-formed JSON value is returned as-is. A missing file is reported as
/// [`ReadJsonError::NotFound`].
pub fn read_json(path: impl AsRef<Path>) -> Result<serde_json::Value, ReadJsonError> {
    read_json_as(path)
}

/// Read the JSON file at `path` into `T`
pub fn read_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ReadJsonError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReadJsonError::from_io(path.to_path_buf(), e))?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            ReadJsonError::from_io(path.to_path_buf(), std::io::Error::from(source))
        } else {
            ReadJsonError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
