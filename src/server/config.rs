//! Server CLI arguments and configuration.

use clap::Parser;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(about = "Exercise log record-keeping service")]
pub struct CliArgs {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "TRACKER_CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "TRACKER_PORT")]
    pub port: u16,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { port: args.port }
    }
}
