//! HTTP server owning the installed router.
//!
//! # Responsibilities
//! - Hold exactly one active Router, installed through `router()`
//! - Apply router options in order before installing
//! - Wire up middleware (timeout, request ID, tracing)
//! - Serve until the shutdown signal

use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::KittyConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::service::RouterService;
use crate::lifecycle::recv_shutdown;
use crate::routing::{apply_options, basic_router, BoxRouter, RouterOption};

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server dispatching every request through one [`Router`](crate::routing::Router).
pub struct Server {
    config: KittyConfig,
    router: Option<BoxRouter>,
}

impl Server {
    /// Create a server with no router installed.
    pub fn new(config: KittyConfig) -> Self {
        Self {
            config,
            router: None,
        }
    }

    /// Install `router` after applying `options` in order.
    ///
    /// Replaces any previously installed router.
    pub fn router<I>(mut self, router: BoxRouter, options: I) -> Self
    where
        I: IntoIterator<Item = RouterOption>,
    {
        self.router = Some(apply_options(router, options));
        self
    }

    /// Returns true once a router has been installed.
    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &KittyConfig {
        &self.config
    }

    /// Freeze the installed router into a service.
    ///
    /// Without an installed router, an empty basic router answers 404 to everything.
    pub fn into_service(self) -> RouterService {
        let router = self.router.unwrap_or_else(|| {
            tracing::warn!("No router configured; every request will receive 404");
            basic_router()
        });
        RouterService::new(router)
    }

    /// Bind to the configured address and serve until shutdown.
    pub async fn bind_and_run(self, shutdown: broadcast::Receiver<()>) -> Result<(), ServerError> {
        let address = self.config.listener.bind_address.clone();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })?;
        self.run(listener, shutdown).await
    }

    /// Run the server, accepting connections on the given listener.
    #[allow(deprecated)]
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        let request_timeout = Duration::from_secs(self.config.timeouts.request_secs);

        let app = axum::Router::new()
            .fallback_service(self.into_service())
            .layer(TimeoutLayer::new(request_timeout))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer());

        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, app)
            .with_graceful_shutdown(recv_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
