//! read-json サブコマンド
//!
//! ローカルのJSONファイルを読み込み、整形して表示します。

use clap::Args;
use std::path::PathBuf;

/// read-json サブコマンドの引数
#[derive(Args, Debug, Clone)]
pub struct ReadJsonArgs {
    /// Path to the JSON file
    pub path: PathBuf,
}

/// Pretty-printed file contents
pub fn render(args: &ReadJsonArgs) -> Result<String, anyhow::Error> {
    let value = crate::utils::read_json(&args.path)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// read-json コマンドを実行
pub fn execute(args: &ReadJsonArgs) -> Result<(), anyhow::Error> {
    println!("{}", render(args)?);
    Ok(())
}
