//! Personas CLI and REST API entry point.
//!
//! Binary name: `personas`
//!
//! Parses CLI arguments, opens the database (creating the schema if needed),
//! then dispatches to a command handler or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use console::style;

use cli::{Cli, Commands, ShowResource};
use personas_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!(e))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "personas", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    let result = run(cli, state).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, state: AppState) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let mut config = state.config.clone();
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }

            let addr = config.bind_address();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "personas API listening");

            if !cli.quiet {
                println!(
                    "  {} Personas API listening on {}",
                    style("⚡").bold(),
                    style(format!("http://{addr}")).cyan()
                );
                println!("  {}", style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::Init => {
            if cli.json {
                let info = serde_json::json!({
                    "data_dir": state.data_dir.display().to_string(),
                    "database_url": state.database_url,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if !cli.quiet {
                println!(
                    "  {} Database ready at {}",
                    style("✓").green(),
                    style(&state.database_url).cyan()
                );
            }
        }

        Commands::Show { resource } => match resource {
            ShowResource::Company { id } => {
                cli::show::show_company(&state, &id, cli.json).await?;
            }
            ShowResource::Persona { id } => {
                cli::show::show_persona(&state, &id, cli.json).await?;
            }
        },

        Commands::Messages { persona_id } => {
            cli::messages::list_messages(&state, &persona_id, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled before state init"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
