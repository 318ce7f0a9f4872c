//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing and HTTP layers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through dispatch logs
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
