//! modeldeck CLI Entry Point

use clap::Parser;
use modeldeck::cli::{endpoint_uri, read_json, workspace_uri, Cli, Commands};
use modeldeck::{logging, PlatformClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = cli.platform_config();

    if let Err(e) = logging::init(config.debug) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(&cli, &config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: &modeldeck::config::PlatformConfig) -> Result<(), anyhow::Error> {
    match &cli.command {
        Commands::ReadJson(args) => read_json::execute(args),
        Commands::EndpointUri(args) => {
            let client = PlatformClient::new(config)?;
            endpoint_uri::execute(&client, args).await
        }
        Commands::WorkspaceUri(args) => {
            let client = PlatformClient::new(config)?;
            workspace_uri::execute(&client, args).await
        }
    }
}
