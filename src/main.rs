//! Route index demo server.
//!
//! Serves a small example API and its discovery page.
//!
//! ```text
//! route-index [--config service.toml] [--bind 127.0.0.1:8080]
//!
//!   GET  /         → discovery page (path configurable)
//!   /users, /orders → example groups, all listed on the page
//! ```

use std::path::PathBuf;

use axum::extract::Path;
use clap::Parser;
use tokio::net::TcpListener;

use route_index::config::{load_config, validate_config, ConfigError, ServiceConfig};
use route_index::observability::logging;
use route_index::{AxumRouter, IndexServer, Registry};

#[derive(Parser)]
#[command(name = "route-index")]
#[command(about = "Serves an example API together with its route discovery page", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability.log_level);

    tracing::info!("route-index v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        index_path = %config.index.path,
        "Configuration loaded"
    );

    let registry = Registry::with_title(config.index.title.clone());
    let api = example_api(&registry);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = IndexServer::new(config, &registry, api);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn example_api(registry: &Registry) -> AxumRouter {
    let mut api = AxumRouter::new();

    registry.create_group(&mut api, "/users", |group| {
        group
            .get("/", || async { "[]" })
            .post("/", || async { "created" })
            .get("/{id}", |Path(id): Path<u64>| async move { format!("user {id}") })
            .delete("/{id}", |Path(id): Path<u64>| async move { format!("deleted user {id}") });
    });

    registry.create_group(&mut api, "/orders", |group| {
        group
            .get("/{id}", |Path(id): Path<u64>| async move { format!("order {id}") })
            .post("/", || async { "created" });
    });

    api
}
