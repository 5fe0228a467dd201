//! Metrics collection and exposition.
//!
//! # Metrics
//! - `landing_requests_total` (counter): page and health requests by path, status
//! - `landing_render_duration_seconds` (histogram): page render latency
//!
//! # Design Decisions
//! - Prometheus exporter runs its own listener, separate from the page server
//! - Recording without an installed recorder is a no-op

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter")
        }
    }
}

/// Record a handled request.
pub fn record_request(path: &'static str, status: u16) {
    metrics::counter!(
        "landing_requests_total",
        "path" => path,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record how long a page render took.
pub fn record_render(start: Instant) {
    metrics::histogram!("landing_render_duration_seconds").record(start.elapsed().as_secs_f64());
}
