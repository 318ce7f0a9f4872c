//! Pluggable HTTP routing.
//!
//! A [`routing::Router`] maps (method, path) pairs to handlers. Any
//! implementation can be installed into an [`http::Server`], optionally
//! adjusted by [`routing::RouterOption`]s; [`routing::basic_router`] is the
//! reference implementation.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::KittyConfig;
pub use http::Server;
pub use lifecycle::Shutdown;
pub use routing::{basic_router, handler_fn, not_found_handler, BoxRouter, Router, RouterOption};
