//! pipe-router demo server.
//!
//! Serves the route table from [`pipe_router::app`] with the router-wide
//! pipes selected in the config file.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use pipe_router::config::{load_config, ServerConfig};
use pipe_router::lifecycle::signals::trigger_on_ctrl_c;
use pipe_router::observability::logging::init_logging;
use pipe_router::{app, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "pipe-router")]
#[command(about = "HTTP router demo with hierarchical middleware pipelines", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Print the route table as JSON and exit.
    #[arg(long)]
    print_routes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);
    tracing::info!("pipe-router v0.1.0 starting");

    let router = app::build_router(&config)?;

    if cli.print_routes {
        println!("{}", serde_json::to_string_pretty(&router.describe())?);
        return Ok(());
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = router.all_routes().len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Route table built"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if let Err(e) = trigger_on_ctrl_c(&shutdown).await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    });

    HttpServer::new(router, config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
