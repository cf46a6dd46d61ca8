//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (compression, request ID, tracing)
//! - Bind server to listener
//! - Dispatch `/health` and `/<timestamp>` requests
//! - Stop on the shutdown signal

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::TrackerConfig;
use crate::http::compression::compression_layer;
use crate::http::patch::{get_patches, health};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::patches::{DirectoryResolver, PatchSource};
use crate::resilience::DeadlineGuard;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PatchSource>,
    pub guard: DeadlineGuard,
}

/// HTTP server for the index tracker.
pub struct HttpServer {
    router: Router,
    config: TrackerConfig,
}

impl HttpServer {
    /// Create a server resolving patches from the configured directory.
    pub fn new(config: TrackerConfig) -> Self {
        let source = Arc::new(DirectoryResolver::from_config(&config.patches));
        Self::with_source(config, source)
    }

    /// Create a server backed by an arbitrary patch source.
    pub fn with_source(config: TrackerConfig, source: Arc<dyn PatchSource>) -> Self {
        let state = AppState {
            source,
            guard: DeadlineGuard::new(config.timeouts.request()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &TrackerConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(health))
            .fallback(get(get_patches))
            .with_state(state)
            .layer(compression_layer(&config.compression))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            patch_dir = %self.config.patches.directory.display(),
            comparison = %self.config.patches.comparison,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
