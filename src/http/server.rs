//! HTTP server setup.
//!
//! # Responsibilities
//! - Mount the discovery page next to the application's groups
//! - Wire up middleware (tracing)
//! - Bind server to listener and shut down gracefully

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::index::Registry;
use crate::routing::AxumRouter;

/// Serves an application router plus its discovery page.
pub struct IndexServer {
    router: Router,
    config: ServiceConfig,
}

impl IndexServer {
    /// Mount the discovery page on `api` and wrap it in middleware.
    ///
    /// The page is registered through `registry` like any other route, so it
    /// lists itself.
    pub fn new(config: ServiceConfig, registry: &Registry, mut api: AxumRouter) -> Self {
        registry.create_group(&mut api, "", |group| {
            group.get(&config.index.path, registry.handler());
        });

        let router = Self::build_router(api);
        Self { router, config }
    }

    fn build_router(api: AxumRouter) -> Router {
        api.into_router().layer(TraceLayer::new_for_http())
    }

    /// Run until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run until `signal` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            index_path = %self.config.index.path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully built router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
