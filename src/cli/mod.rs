//! CLI module for MythRealms.
//!
//! Subcommands:
//! - `init`: Create the storage schema and apply migrations
//! - `serve`: Run the HTTP API

mod init;
mod serve;

use clap::{Parser, Subcommand};

/// MythRealms - game design document and asset catalog
#[derive(Parser)]
#[command(name = "mythrealms")]
#[command(about = "MythRealms GDD & content management backend")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the storage schema and apply pending migrations
    Init,

    /// Run the HTTP API
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value = "8001")]
        port: u16,

        /// Keep all data in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Init => self.run_init().await,
            Command::Serve {
                ref host,
                port,
                in_memory,
            } => self.run_serve(host, port, in_memory).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let app = App::try_parse_from(["mythrealms", "serve"]).unwrap();
        match app.command {
            Command::Serve {
                host,
                port,
                in_memory,
            } => {
                assert_eq!(host, "0.0.0.0");
                assert_eq!(port, 8001);
                assert!(!in_memory);
            }
            Command::Init => panic!("expected serve"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let app = App::try_parse_from(["mythrealms", "serve", "--in-memory", "-v"]).unwrap();
        assert!(app.verbose);
        assert!(matches!(app.command, Command::Serve { in_memory: true, .. }));
    }
}
