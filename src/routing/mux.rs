//! Path multiplexer.
//!
//! # Responsibilities
//! - Store one handler per path pattern
//! - Look up the handler for a request path
//! - Answer unmatched paths with the default 404
//!
//! # Design Decisions
//! - No knowledge of HTTP methods; that is layered on by `BasicRouter`
//! - Exact patterns win over subtree patterns; the longest subtree wins
//! - Re-registering a pattern replaces its handler (last write wins)
//! - O(1) exact lookup via HashMap, O(n) subtree scan

use std::collections::HashMap;

use axum::body::Body;
use axum::http::Request;

use crate::http::response::not_found;
use crate::routing::matcher::PathPattern;
use crate::routing::{BoxResponseFuture, Handler, SharedHandler};

/// A path-only request multiplexer.
#[derive(Default)]
pub struct ServeMux {
    exact: HashMap<String, SharedHandler>,
    /// Subtree patterns, longest first.
    subtrees: Vec<(PathPattern, SharedHandler)>,
}

impl ServeMux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `pattern`.
    ///
    /// Returns true if a handler was already registered for the pattern and
    /// got replaced. Empty patterns are ignored.
    pub fn insert(&mut self, pattern: &str, handler: SharedHandler) -> bool {
        match PathPattern::parse(pattern) {
            Some(PathPattern::Exact(path)) => self.exact.insert(path, handler).is_some(),
            Some(subtree) => {
                if let Some(slot) = self.subtrees.iter_mut().find(|(p, _)| *p == subtree) {
                    slot.1 = handler;
                    return true;
                }
                self.subtrees.push((subtree, handler));
                self.subtrees
                    .sort_by(|(a, _), (b, _)| b.as_str().len().cmp(&a.as_str().len()));
                false
            }
            None => {
                tracing::warn!("Ignoring registration with empty path pattern");
                false
            }
        }
    }

    /// Find the handler for `path`.
    pub fn lookup(&self, path: &str) -> Option<&SharedHandler> {
        if let Some(handler) = self.exact.get(path) {
            return Some(handler);
        }
        self.subtrees
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, handler)| handler)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.exact.len() + self.subtrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispatch `request` to the matching handler, or answer 404.
    pub fn dispatch(&self, request: Request<Body>) -> BoxResponseFuture {
        match self.lookup(request.uri().path()) {
            Some(handler) => handler.call(request),
            None => {
                tracing::debug!(path = %request.uri().path(), "No pattern matched");
                Box::pin(async { not_found() })
            }
        }
    }
}

impl std::fmt::Debug for ServeMux {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut patterns: Vec<&str> = self.exact.keys().map(String::as_str).collect();
        patterns.extend(self.subtrees.iter().map(|(p, _)| p.as_str()));
        f.debug_struct("ServeMux").field("patterns", &patterns).finish()
    }
}
