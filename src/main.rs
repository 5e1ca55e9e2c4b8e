//! Snipbox server binary.
//!
//! Startup order: CLI → config → logging → template engine → bind → serve.
//! Any startup error is fatal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use snipbox::config::{self, AppConfig};
use snipbox::http::HttpServer;
use snipbox::lifecycle::{signals, Shutdown};
use snipbox::observability::logging;
use snipbox::templates::TemplateEngine;

#[derive(Parser)]
#[command(name = "snipbox")]
#[command(about = "A small snippet-sharing web application", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Compiled-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "127.0.0.1:4000").
    #[arg(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => config::load_config(&path)?,
        None => AppConfig::default(),
    };
    if let Some(addr) = cli.addr {
        config.listener.bind_address = addr;
    }

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        template_dir = %config.ui.template_dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let templates = Arc::new(TemplateEngine::load(Path::new(&config.ui.template_dir))?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        trigger.trigger();
    });

    let server = HttpServer::new(config, templates);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
