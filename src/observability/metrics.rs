//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define tracker metrics (requests, latency, patches served, timeouts)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `index_tracker_requests_total` (counter): requests by status
//! - `index_tracker_request_duration_seconds` (histogram): latency distribution
//! - `index_tracker_patches_served_total` (counter): bodies returned with 200
//! - `index_tracker_patch_bytes_total` (counter): uncompressed bytes served
//! - `index_tracker_timeouts_total` (counter): requests cut off by the deadline
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recording is a no-op until an exporter is installed

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a finished request.
pub fn record_request(status: u16, start: Instant) {
    metrics::counter!("index_tracker_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("index_tracker_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Record a successfully served patch body.
pub fn record_patch_body(bytes: usize) {
    metrics::counter!("index_tracker_patches_served_total").increment(1);
    metrics::counter!("index_tracker_patch_bytes_total").increment(bytes as u64);
}

/// Record a request that hit the deadline.
pub fn record_timeout() {
    metrics::counter!("index_tracker_timeouts_total").increment(1);
}
