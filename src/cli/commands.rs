//! CLI command implementations
//!
//! `serve` boots in order: tracing, config, store connection, schema
//! bootstrap, HTTP server. The tokio runtime is created here; nothing
//! above the CLI spawns threads or opens connections.

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::CupcakeStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve {
            host,
            port,
            database_url,
        } => serve(host, port, database_url),
    }
}

/// Boot the store and serve the HTTP API until the process is killed.
pub fn serve(
    host: Option<String>,
    port: Option<u16>,
    database_url: Option<String>,
) -> CliResult<()> {
    init_tracing();

    // Flags override environment, environment overrides defaults
    let mut config = ServerConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(url) = database_url {
        config.database_url = url;
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Boot(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        tracing::info!(database_url = %config.database_url, "connecting to store");
        let store = CupcakeStore::connect(&config.database_url).await?;
        store.init_schema().await?;

        let server = HttpServer::new(config, store);
        server.start().await?;
        Ok(())
    })
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
