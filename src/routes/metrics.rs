//! Prometheus metrics endpoint
//!
//! Exposes relay metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    metrics::describe_counter!(
        "relay_requests_total",
        "Total number of generation requests relayed"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Time until the inference API answered, in seconds"
    );
}

/// Render the current metrics in Prometheus text format
pub fn render() -> String {
    PROMETHEUS_HANDLE.render()
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    render()
}

/// Record a relayed request
///
/// Labelled by outcome only, never by values taken from the request body.
pub fn record_request(status: &str, duration_secs: f64) {
    metrics::counter!("relay_requests_total", "status" => status.to_string()).increment(1);
    metrics::histogram!("relay_request_duration_seconds").record(duration_secs);
}
