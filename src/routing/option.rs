//! Router options applied before a router is installed.

use crate::routing::{BoxRouter, SharedHandler};

/// A post-construction adjustment of a router.
///
/// An option may mutate the router and hand it back, or return a different
/// router entirely.
pub struct RouterOption {
    apply: Box<dyn FnOnce(BoxRouter) -> BoxRouter + Send>,
}

impl RouterOption {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(BoxRouter) -> BoxRouter + Send + 'static,
    {
        Self { apply: Box::new(f) }
    }

    /// Run the option against `router`.
    pub fn apply(self, router: BoxRouter) -> BoxRouter {
        (self.apply)(router)
    }
}

impl std::fmt::Debug for RouterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterOption").finish_non_exhaustive()
    }
}

/// Apply `options` to `router` in the order given.
pub fn apply_options<I>(router: BoxRouter, options: I) -> BoxRouter
where
    I: IntoIterator<Item = RouterOption>,
{
    options
        .into_iter()
        .fold(router, |router, option| option.apply(router))
}

/// Option that installs `handler` as the router's not-found handler.
pub fn not_found_handler(handler: SharedHandler) -> RouterOption {
    RouterOption::new(move |mut router| {
        router.set_not_found_handler(handler);
        router
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{handler_fn, BoxResponseFuture, Router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use std::sync::{Arc, Mutex};

    /// Router that records every call made on it.
    struct RecordingRouter {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Router for RecordingRouter {
        fn handle(&mut self, methods: &[&str], paths: &[&str], _handler: SharedHandler) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:handle:{}:{}", self.name, methods.join(","), paths.join(",")));
        }

        fn set_not_found_handler(&mut self, _handler: SharedHandler) {
            self.log.lock().unwrap().push(format!("{}:not_found", self.name));
        }

        fn serve(&self, _request: Request<Body>) -> BoxResponseFuture {
            let name = self.name;
            Box::pin(async move { (StatusCode::OK, name).into_response() })
        }
    }

    fn recording(name: &'static str, log: &Arc<Mutex<Vec<String>>>) -> BoxRouter {
        Box::new(RecordingRouter {
            name,
            log: log.clone(),
        })
    }

    #[test]
    fn test_options_run_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let router = recording("r", &log);

        let first = RouterOption::new(|mut r| {
            r.handle(&["GET"], &["/first"], handler_fn(|_| async { "" }));
            r
        });
        let second = not_found_handler(handler_fn(|_| async { "" }));

        let _ = apply_options(router, vec![first, second]);

        let log = log.lock().unwrap();
        assert_eq!(*log, vec!["r:handle:GET:/first", "r:not_found"]);
    }

    #[tokio::test]
    async fn test_option_can_substitute_router() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let replacement_log = log.clone();

        let swap = RouterOption::new(move |_old| recording("replacement", &replacement_log));
        let observe = RouterOption::new(|mut r| {
            r.set_not_found_handler(handler_fn(|_| async { "" }));
            r
        });

        let router = apply_options(recording("original", &log), [swap, observe]);

        // The second option saw the substituted router, not the original.
        assert_eq!(*log.lock().unwrap(), vec!["replacement:not_found"]);

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = router.serve(req).await;
        let body = axum::body::to_bytes(res.into_body(), 64).await.unwrap();
        assert_eq!(&body[..], b"replacement");
    }

    #[test]
    fn test_no_options_keeps_router() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut router = apply_options(recording("same", &log), Vec::new());
        router.set_not_found_handler(handler_fn(|_| async { "" }));
        assert_eq!(*log.lock().unwrap(), vec!["same:not_found"]);
    }
}
