//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// User API - CRUD service for user records
#[derive(Parser, Debug)]
#[command(name = "user-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command.
///
/// Both fall back to the loaded [`Config`](crate::config::Config) when omitted.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Resolve the bind address, preferring explicit arguments.
    pub fn bind_addr(&self, default_host: &str, default_port: u16) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or(default_host),
            self.port.unwrap_or(default_port)
        )
    }
}
