//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum serve, middleware: request ID, trace, timeout)
//!     → service.rs (tower bridge, metrics)
//!     → installed Router (routing/)
//!     → handler response, or response.rs not_found()
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod service;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{not_found, StaticResponse};
pub use server::{Server, ServerError};
pub use service::RouterService;
