//! Handler capability.
//!
//! # Responsibilities
//! - Define the unit of work a router delegates a matched request to
//! - Adapt plain async closures into shareable handlers
//!
//! # Design Decisions
//! - Handlers are `Arc`-shared so one registration can serve many paths
//! - Every handler resolves to exactly one `Response`; failures are
//!   expressed as responses by the handler itself

use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

/// Future returned by handlers and routers.
pub type BoxResponseFuture = BoxFuture<'static, Response>;

/// Something that can answer an HTTP request.
pub trait Handler: Send + Sync + 'static {
    /// Produce the response for `request`.
    fn call(&self, request: Request<Body>) -> BoxResponseFuture;
}

/// A handler shared between registrations.
pub type SharedHandler = Arc<dyn Handler>;

/// Handler backed by an async closure.
#[derive(Clone)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F, Fut, R> Handler for HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn call(&self, request: Request<Body>) -> BoxResponseFuture {
        let fut = (self.f)(request);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// Wrap an async closure as a [`SharedHandler`].
///
/// ```ignore
/// let hello = handler_fn(|_req| async { "hello" });
/// ```
pub fn handler_fn<F, Fut, R>(f: F) -> SharedHandler
where
    F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(HandlerFn { f })
}
