//! Landing page server.
//!
//! # Architecture Overview
//!
//! ```text
//!   cfg/config.yaml
//!        │
//!        ▼
//!   ┌──────────┐    ┌─────────────┐    ┌───────────┐    ┌──────────────┐
//!   │  config  │───▶│  expansion  │───▶│  render   │───▶│     http     │───▶ Client
//!   │  loader  │    │  PageView   │    │ templates │    │ axum server  │
//!   └──────────┘    └─────────────┘    └───────────┘    └──────────────┘
//!                                                             │
//!                                                   /resources/* static files
//! ```
//!
//! Everything left of `http` runs once at startup. Requests only read the
//! precomputed view.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use landing::config::load_config;
use landing::lifecycle::{prepare, signals, Shutdown};
use landing::observability::{logging, metrics};
use landing::HttpServer;

#[derive(Parser)]
#[command(name = "landing")]
#[command(
    about = "Serve an environment landing page built from a declarative config",
    long_about = None
)]
struct Cli {
    /// Path to the YAML or TOML config file.
    #[arg(short, long, default_value = "cfg/config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the landing page (default)
    Serve {
        /// Override `server.bind_address`
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Render the page once and write it to stdout or a file
    Render {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate and expand the config, then print a summary
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        tabs = config.tabs.len(),
        customer_groups = config.customers.len(),
        "landing starting"
    );

    let mut prepared = prepare(config)?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                prepared.server.bind_address = bind;
            }

            if prepared.observability.metrics_enabled {
                match prepared.observability.metrics_address.parse() {
                    Ok(addr) => metrics::init_metrics(addr),
                    Err(_) => tracing::error!(
                        metrics_address = %prepared.observability.metrics_address,
                        "Failed to parse metrics address"
                    ),
                }
            }

            let listener = TcpListener::bind(&prepared.server.bind_address).await?;
            tracing::info!(
                address = %listener.local_addr()?,
                "Listening for connections"
            );

            let shutdown = Shutdown::new();
            let server_shutdown = shutdown.subscribe();
            signals::listen_for_signals(shutdown);

            let server = HttpServer::new(prepared.server, prepared.view, prepared.renderer);
            server.run(listener, server_shutdown).await?;

            tracing::info!("Shutdown complete");
        }
        Commands::Render { output } => {
            let html = prepared.renderer.render_page(&prepared.view)?;
            match output {
                Some(path) => {
                    fs::write(&path, html)?;
                    tracing::info!(path = %path.display(), "Page written");
                }
                None => println!("{html}"),
            }
        }
        Commands::Check => {
            let view = &prepared.view;
            println!("title:        {}", view.config.title);
            println!("environment:  {} ({})", view.config.environment, view.config.env_color);
            println!("shards:       {}", view.config.shard_names().join(", "));
            println!("tenants:      {}", view.tenant_count());
            println!("tabs:         {}", view.config.tabs.len());
        }
    }

    Ok(())
}
