//! Metrics collection and exposition.
//!
//! # Metrics
//! - `kitty_requests_total` (counter): dispatched requests by method, status
//! - `kitty_request_duration_seconds` (histogram): dispatch latency by method
//! - `kitty_routes_registered_total` (counter): path registrations
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - Prometheus exporter is optional and bound to its own address

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one dispatched request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    counter!(
        "kitty_requests_total",
        "method" => method.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("kitty_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}

/// Record one path registration.
pub fn record_route_registered() {
    counter!("kitty_routes_registered_total").increment(1);
}
