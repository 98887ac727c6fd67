//! CLI command definitions for the `personas` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod messages;
pub mod show;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Store companies, personas and their chat messages behind a JSON API.
#[derive(Parser)]
#[command(name = "personas", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (default from config.toml / PORT, else 5000).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config.toml, else 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },

    /// Create the database and its tables if missing.
    Init,

    /// Show a stored record.
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },

    /// Print a persona's conversation, oldest message first.
    Messages {
        /// Persona id.
        persona_id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ShowResource {
    /// Show a company by id.
    Company {
        /// Company id.
        id: String,
    },
    /// Show a persona by id.
    Persona {
        /// Persona id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(["personas", "serve", "--port", "8080", "--host", "0.0.0.0"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_show_persona_with_global_json() {
        let cli = Cli::parse_from(["personas", "show", "persona", "abc", "--json"]);
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Show { resource: ShowResource::Persona { ref id } } if id == "abc"
        ));
    }
}
