//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Configuration (at startup):
//!     basic_router() / custom Router
//!     → handle(methods, paths, handler) per endpoint
//!     → RouterOption[] applied in order (option.rs)
//!     → installed into the Server
//!
//! Incoming Request (method, path)
//!     → Router::serve
//!     → router.rs (method filter per registered path)
//!     → mux.rs (path lookup: exact, then longest subtree)
//!     → matched handler, or 404
//! ```
//!
//! # Design Decisions
//! - `Router` is a trait: any implementation is interchangeable
//! - Registration happens before serving; dispatch only takes `&self`
//! - Disallowed method and unknown path both answer 404

pub mod handler;
pub mod matcher;
pub mod mux;
pub mod option;
pub mod router;

use axum::body::Body;
use axum::http::Request;

pub use handler::{handler_fn, BoxResponseFuture, Handler, SharedHandler};
pub use mux::ServeMux;
pub use option::{apply_options, not_found_handler, RouterOption};
pub use router::{basic_router, BasicRouter};

/// Contract every URL dispatch implementation satisfies.
pub trait Router: Send + Sync + 'static {
    /// Register `handler` for every method in `methods` on every path in `paths`.
    ///
    /// Later registrations for the same path may replace earlier ones; the
    /// exact precedence belongs to the implementation.
    fn handle(&mut self, methods: &[&str], paths: &[&str], handler: SharedHandler);

    /// Install the handler used when no registered path matches.
    ///
    /// Implementations that cannot honor this must treat it as a no-op.
    fn set_not_found_handler(&mut self, handler: SharedHandler);

    /// Dispatch a request to the matched handler.
    fn serve(&self, request: Request<Body>) -> BoxResponseFuture;
}

/// An owned, type-erased router.
pub type BoxRouter = Box<dyn Router>;
