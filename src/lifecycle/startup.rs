//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the reference router from configured routes
//! - Turn the configured not-found response into a router option
//! - Hand the result to a `Server`
//!
//! # Design Decisions
//! - Fail fast: an unservable route is a startup error
//! - Routes register in file order, so a later route wins a shared path

use std::sync::Arc;

use crate::config::KittyConfig;
use crate::http::response::{ResponseConfigError, StaticResponse};
use crate::http::Server;
use crate::routing::{basic_router, not_found_handler, RouterOption};

/// Error type for startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("route {route:?}: {source}")]
    Route {
        route: String,
        source: ResponseConfigError,
    },
    #[error("not_found: {0}")]
    NotFound(ResponseConfigError),
}

/// Build a server whose basic router serves every configured route.
pub fn configure_server(config: KittyConfig) -> Result<Server, StartupError> {
    let mut router = basic_router();

    for route in &config.routes {
        let handler = StaticResponse::try_from(&route.response).map_err(|source| {
            StartupError::Route {
                route: route.name.clone(),
                source,
            }
        })?;
        let methods: Vec<&str> = route.methods.iter().map(String::as_str).collect();
        let paths: Vec<&str> = route.paths.iter().map(String::as_str).collect();
        router.handle(&methods, &paths, Arc::new(handler));

        tracing::info!(
            route = %route.name,
            methods = ?route.methods,
            paths = ?route.paths,
            "Route configured"
        );
    }

    let mut options: Vec<RouterOption> = Vec::new();
    if let Some(not_found) = &config.not_found {
        let handler = StaticResponse::try_from(not_found).map_err(StartupError::NotFound)?;
        options.push(not_found_handler(Arc::new(handler)));
    }

    Ok(Server::new(config).router(router, options))
}
