//! Reference router built on [`ServeMux`].
//!
//! # Responsibilities
//! - Register one method-filtering handler per path on the multiplexer
//! - Forward dispatch to the multiplexer
//!
//! # Design Decisions
//! - The method set is built once per `handle` call and shared, immutable,
//!   by every path of that call
//! - Method membership is an exact, case-sensitive string match
//! - A disallowed method answers 404, the same as an unknown path
//! - The multiplexer owns not-found behavior, so `set_not_found_handler`
//!   is a no-op here

use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::http::response::not_found;
use crate::observability::metrics;
use crate::routing::mux::ServeMux;
use crate::routing::{BoxResponseFuture, BoxRouter, Handler, Router, SharedHandler};

/// Create the reference router.
pub fn basic_router() -> BoxRouter {
    Box::new(BasicRouter::new())
}

/// Router that layers method filtering over a path-only multiplexer.
#[derive(Debug, Default)]
pub struct BasicRouter {
    mux: ServeMux,
}

impl BasicRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying multiplexer.
    pub fn mux(&self) -> &ServeMux {
        &self.mux
    }
}

impl Router for BasicRouter {
    fn handle(&mut self, methods: &[&str], paths: &[&str], handler: SharedHandler) {
        let allowed: Arc<HashSet<String>> =
            Arc::new(methods.iter().map(|m| m.to_string()).collect());

        if allowed.is_empty() {
            tracing::warn!(paths = ?paths, "Registering paths with no allowed methods");
        }

        for path in paths {
            let filter = MethodFilter {
                allowed: Arc::clone(&allowed),
                inner: Arc::clone(&handler),
            };
            if self.mux.insert(path, Arc::new(filter)) {
                tracing::debug!(path = %path, "Replaced existing registration");
            }
            metrics::record_route_registered();
            tracing::debug!(path = %path, methods = ?methods, "Route registered");
        }
    }

    fn set_not_found_handler(&mut self, _handler: SharedHandler) {
        tracing::debug!("BasicRouter keeps the multiplexer's not-found response; handler ignored");
    }

    fn serve(&self, request: Request<Body>) -> BoxResponseFuture {
        self.mux.dispatch(request)
    }
}

/// Per-path handler that only delegates for allowed methods.
struct MethodFilter {
    allowed: Arc<HashSet<String>>,
    inner: SharedHandler,
}

impl Handler for MethodFilter {
    fn call(&self, request: Request<Body>) -> BoxResponseFuture {
        if self.allowed.contains(request.method().as_str()) {
            return self.inner.call(request);
        }
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "Method not allowed for path"
        );
        Box::pin(async { not_found() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler_fn;
    use axum::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(name: &'static str, hits: &Arc<AtomicUsize>) -> SharedHandler {
        let hits = hits.clone();
        handler_fn(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
            async move { name }
        })
    }

    async fn call(router: &dyn Router, method: &str, path: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let res = router.serve(req).await;
        let status = res.status();
        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_single_method_single_path() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut router = BasicRouter::new();
        router.handle(&["GET"], &["/x"], counting("h1", &hits));

        assert_eq!(call(&router, "GET", "/x").await, (StatusCode::OK, "h1".into()));
        assert_eq!(call(&router, "POST", "/x").await.0, StatusCode::NOT_FOUND);
        assert_eq!(call(&router, "GET", "/y").await.0, StatusCode::NOT_FOUND);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_many_methods_many_paths() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut router = BasicRouter::new();
        router.handle(&["GET", "POST"], &["/a", "/b"], counting("h2", &hits));

        for (method, path) in [("GET", "/a"), ("POST", "/a"), ("GET", "/b"), ("POST", "/b")] {
            assert_eq!(call(&router, method, path).await, (StatusCode::OK, "h2".into()));
        }
        assert_eq!(call(&router, "DELETE", "/a").await.0, StatusCode::NOT_FOUND);
        assert_eq!(hits.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_method_match_is_case_sensitive() {
        let mut router = BasicRouter::new();
        router.handle(&["get"], &["/x"], handler_fn(|_| async { "lower" }));

        assert_eq!(call(&router, "GET", "/x").await.0, StatusCode::NOT_FOUND);
        assert_eq!(call(&router, "get", "/x").await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_second_registration_replaces_first() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut router = BasicRouter::new();
        router.handle(&["GET"], &["/x"], counting("first", &first));
        router.handle(&["POST"], &["/x"], counting("second", &second));

        // Method sets are not merged: GET is gone.
        assert_eq!(call(&router, "GET", "/x").await.0, StatusCode::NOT_FOUND);
        assert_eq!(call(&router, "POST", "/x").await, (StatusCode::OK, "second".into()));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_set_not_found_handler_is_noop() {
        let mut router = BasicRouter::new();
        router.handle(&["GET"], &["/x"], handler_fn(|_| async { "x" }));

        let before_missing = call(&router, "GET", "/missing").await;
        let before_method = call(&router, "PUT", "/x").await;

        let custom = Arc::new(AtomicUsize::new(0));
        router.set_not_found_handler(counting("custom", &custom));

        assert_eq!(call(&router, "GET", "/missing").await, before_missing);
        assert_eq!(call(&router, "PUT", "/x").await, before_method);
        assert_eq!(custom.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_sets_tolerated() {
        let mut router = BasicRouter::new();
        router.handle(&[], &["/x"], handler_fn(|_| async { "x" }));
        router.handle(&["GET"], &[], handler_fn(|_| async { "never" }));

        assert_eq!(router.mux().len(), 1);
        assert_eq!(call(&router, "GET", "/x").await.0, StatusCode::NOT_FOUND);
    }
}
