//! ロギング初期化
//!
//! `MODELDECK_LOG_LEVEL`（未設定時は `RUST_LOG`、どちらもなければ `info`）で
//! フィルタを決定し、stderrへ出力する。stdoutはCLIの出力専用。
//! ダンプ有効時はベースのレベルに関わらずリクエスト/レスポンスのダンプを出力する。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Directive that keeps the request/response dump visible
pub const DUMP_DIRECTIVE: &str = "modeldeck::client::debug=debug";

/// Base directive from the environment, if one is set
fn env_directive() -> Option<String> {
    ["MODELDECK_LOG_LEVEL", "RUST_LOG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Combine a base directive with the dump directive
pub fn directive(base: Option<&str>, dump: bool) -> String {
    let base = base
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    if dump {
        format!("{},{}", base, DUMP_DIRECTIVE)
    } else {
        base.to_string()
    }
}

/// Resolve the filter directive from the environment
pub fn filter_directive(dump: bool) -> String {
    directive(env_directive().as_deref(), dump)
}

/// Build the filter; an unparseable base falls back to the default level.
pub fn env_filter(base: Option<&str>, dump: bool) -> EnvFilter {
    EnvFilter::try_new(directive(base, dump))
        .unwrap_or_else(|_| EnvFilter::new(directive(None, dump)))
}

/// Install the global tracing subscriber
///
/// `dump` comes from the resolved `PlatformConfig::debug` (flag or environment).
pub fn init(dump: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = env_filter(env_directive().as_deref(), dump);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
}
