//! endpoint-uri サブコマンド
//!
//! モデルバージョンの稼働中エンドポイントURIを表示します。

use anyhow::bail;
use clap::Args;

use crate::client::EndpointLister;
use crate::utils::get_endpoint_uri;

/// endpoint-uri サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct EndpointUriArgs {
    /// Model ID
    #[arg(long)]
    pub model_id: u64,

    /// Version ID
    #[arg(long)]
    pub version_id: u64,
}

/// endpoint-uri コマンドを実行
pub async fn execute<L>(lister: &L, args: &EndpointUriArgs) -> Result<(), anyhow::Error>
where
    L: EndpointLister + ?Sized,
{
    match get_endpoint_uri(lister, args.model_id, args.version_id).await? {
        Some(uri) => {
            println!("{}", uri);
            Ok(())
        }
        None => bail!(
            "No active endpoint found for model {} version {}",
            args.model_id,
            args.version_id
        ),
    }
}
