//! CLI module for modeldeck
//!
//! Provides command-line access to endpoint and workspace lookups.

/// endpoint-uri サブコマンド
pub mod endpoint_uri;
/// read-json サブコマンド
pub mod read_json;
/// workspace-uri サブコマンド
pub mod workspace_uri;

use clap::{Parser, Subcommand};

use crate::config::PlatformConfig;

/// modeldeck - Look up deployed model endpoints and workspaces
#[derive(Parser, Debug)]
#[command(name = "modeldeck")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    MODELDECK_API_HOST      Platform API host (default: http://localhost:8000)
    MODELDECK_API_KEY       API key sent as a bearer token
    MODELDECK_TIMEOUT_SECS  Request timeout in seconds (default: 30)
    MODELDECK_DEBUG         Dump requests and responses (default: off)
    MODELDECK_LOG_LEVEL     Log level (default: info)
"#)]
pub struct Cli {
    /// Platform API host (overrides MODELDECK_API_HOST)
    #[arg(long, global = true)]
    pub api_host: Option<String>,

    /// Dump every request/response exchange (same as MODELDECK_DEBUG)
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    pub fn platform_config(&self) -> PlatformConfig {
        let mut config = PlatformConfig::from_env();
        if let Some(host) = &self.api_host {
            config = config.with_api_host(host.clone());
        }
        if self.debug {
            config.debug = true;
        }
        config
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the URI of the active endpoint for a model version
    EndpointUri(endpoint_uri::EndpointUriArgs),
    /// Print the URL of the current workspace
    WorkspaceUri(workspace_uri::WorkspaceUriArgs),
    /// Pretty-print a local JSON file
    ReadJson(read_json::ReadJsonArgs),
}
