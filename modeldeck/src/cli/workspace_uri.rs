//! workspace-uri サブコマンド
//!
//! 現在のワークスペースURLを表示します。

use clap::Args;

use crate::client::WorkspaceFetcher;
use crate::utils::get_workspace_uri;

/// workspace-uri サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct WorkspaceUriArgs {}

/// workspace-uri コマンドを実行
pub async fn execute<F>(fetcher: &F, _args: &WorkspaceUriArgs) -> Result<(), anyhow::Error>
where
    F: WorkspaceFetcher + ?Sized,
{
    let url = get_workspace_uri(fetcher).await?;
    println!("{}", url);
    Ok(())
}
