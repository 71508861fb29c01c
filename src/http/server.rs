//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the sum route
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind the server to a listener and serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{LimitsConfig, ServerConfig};
use crate::http::request::RequestIdLayer;
use crate::http::total::sum_stream;
use crate::workers::ParsePool;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<ParsePool>,
    pub limits: LimitsConfig,
}

/// HTTP server for the sum service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            pool: Arc::new(ParsePool::new(config.workers.worker_threads)),
            limits: config.limits.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/total/", post(sum_stream))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(RequestIdLayer)
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until the listener closes or shutdown fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
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
