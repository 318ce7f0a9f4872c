//! Response helpers.
//!
//! # Responsibilities
//! - Produce the default 404 response shared by the multiplexer and method filter
//! - Serve fixed responses declared in configuration
//!
//! # Design Decisions
//! - The 404 body is plain text with `nosniff`, nothing route-specific
//! - Routing never rewrites a handler's response

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::ResponseConfig;
use crate::routing::{BoxResponseFuture, Handler};

pub const NOT_FOUND_BODY: &str = "404 page not found\n";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// The default not-found response.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, TEXT_PLAIN),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        NOT_FOUND_BODY,
    )
        .into_response()
}

/// Handler answering every request with the same status and body.
#[derive(Debug, Clone)]
pub struct StaticResponse {
    status: StatusCode,
    content_type: HeaderValue,
    body: String,
}

impl StaticResponse {
    pub fn new(status: StatusCode, content_type: HeaderValue, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }
}

/// A configured response that cannot be served.
#[derive(Debug, Error)]
pub enum ResponseConfigError {
    #[error("invalid status code {0}")]
    Status(u16),
    #[error("invalid content type {0:?}")]
    ContentType(String),
}

impl TryFrom<&ResponseConfig> for StaticResponse {
    type Error = ResponseConfigError;

    fn try_from(config: &ResponseConfig) -> Result<Self, Self::Error> {
        let status = StatusCode::from_u16(config.status)
            .map_err(|_| ResponseConfigError::Status(config.status))?;
        let content_type = HeaderValue::from_str(&config.content_type)
            .map_err(|_| ResponseConfigError::ContentType(config.content_type.clone()))?;
        Ok(Self::new(status, content_type, config.body.clone()))
    }
}

impl Handler for StaticResponse {
    fn call(&self, _request: Request<Body>) -> BoxResponseFuture {
        let response = (
            self.status,
            [(header::CONTENT_TYPE, self.content_type.clone())],
            self.body.clone(),
        )
            .into_response();
        Box::pin(async move { response })
    }
}
