//! Tower bridge for an installed router.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::Service;

use crate::http::request::RequestIdExt;
use crate::observability::metrics;
use crate::routing::{BoxRouter, Router};

/// A cloneable `tower::Service` that dispatches through a [`Router`].
///
/// Once built, the router is shared read-only across all connections.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<dyn Router>,
}

impl RouterService {
    pub fn new(router: BoxRouter) -> Self {
        Self {
            router: Arc::from(router),
        }
    }

    /// Dispatch one request and record its outcome.
    pub async fn dispatch(&self, request: Request<Body>) -> Response {
        let start = Instant::now();
        let method = request.method().to_string();
        let path = request.uri().path().to_string();
        let request_id = request.request_id().unwrap_or("unknown").to_string();

        let response = self.router.serve(request).await;

        let status = response.status().as_u16();
        metrics::record_request(&method, status, start);
        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Request dispatched"
        );
        response
    }
}

impl std::fmt::Debug for RouterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterService").finish_non_exhaustive()
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let this = self.clone();
        Box::pin(async move { Ok(this.dispatch(request).await) })
    }
}
