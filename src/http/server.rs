//! HTTP server setup.
//!
//! # Responsibilities
//! - Compile the route table into an axum router
//! - Wire up server-wide layers (request timeout, HTTP tracing)
//! - Serve on a listener until shutdown is signalled
//!
//! # Design Decisions
//! - The route table is frozen before the first connection is accepted
//! - Server-wide layers wrap the whole table, outside every route pipeline

use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::routing::Router;

/// HTTP server for a finished route table.
pub struct HttpServer {
    app: axum::Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Freeze `router` and prepare it for serving with `config`.
    pub fn new(router: Router, config: ServerConfig) -> Self {
        let app = Self::build_app(router, &config);
        Self { app, config }
    }

    #[allow(deprecated)]
    fn build_app(router: Router, config: &ServerConfig) -> axum::Router {
        router
            .into_axum_router()
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
