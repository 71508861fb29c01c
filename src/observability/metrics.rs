//! Metrics collection and exposition.
//!
//! # Metrics
//! - `sum_requests_total` (counter): finished requests by status code
//! - `sum_request_duration_seconds` (histogram): latency distribution
//! - `sum_bytes_processed_total` (counter): request body bytes parsed
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op, so handlers
//!   record unconditionally

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(error = %error, "Failed to install metrics exporter"),
    }
}

/// Record one finished request.
pub fn record_request(status: StatusCode, start: Instant) {
    counter!("sum_requests_total", "status" => status.as_u16().to_string()).increment(1);
    histogram!("sum_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record parsed request body bytes.
pub fn record_bytes(bytes: usize) {
    counter!("sum_bytes_processed_total").increment(bytes as u64);
}
