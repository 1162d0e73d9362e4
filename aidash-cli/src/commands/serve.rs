//! Serve command for running the dashboard server

use std::path::PathBuf;
use std::sync::Arc;

use aidash_server::{AppState, DashboardServer, ServerConfig};
use anyhow::Result;
use clap::Args;
use tracing::info;

use super::DashboardParts;
use crate::config::ConfigLoader;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    pub host: Option<String>,

    /// Provider configuration file (TOML or JSON)
    #[arg(long)]
    pub providers: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let server_config = ServerConfig::new(
        args.host.unwrap_or(config.server.host.clone()),
        args.port.unwrap_or(config.server.port),
    );

    let parts = DashboardParts::build(&config, args.providers)?;
    info!(
        "Starting aidash dashboard on {} with {} testers",
        server_config.addr(),
        parts.testers.len()
    );

    let state = Arc::new(AppState::new(parts.source, parts.testers));
    DashboardServer::new(server_config, state).run().await?;

    Ok(())
}
