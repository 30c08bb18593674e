//! CLI argument definitions using clap
//!
//! Commands:
//! - cupcakes serve [--host <host>] [--port <port>] [--database-url <url>]

use clap::{Parser, Subcommand};

/// cupcakes - a minimal JSON REST service for managing cupcakes
#[derive(Parser, Debug)]
#[command(name = "cupcakes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Database connection string (overrides DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(["cupcakes", "serve", "--port", "8080"]);
        let Command::Serve { host, port, database_url } = cli.command;
        assert_eq!(host, None);
        assert_eq!(port, Some(8080));
        assert_eq!(database_url, None);
    }
}
