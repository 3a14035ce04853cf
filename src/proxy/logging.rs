//! Request logging for relayed generation calls
//!
//! Gives every relayed request a short correlation id so the forwarded
//! model, upstream outcome and failures can be matched up in the logs.

use std::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Context for tracking one relayed request
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Model id as sent by the caller
    pub model: String,
}

impl RequestContext {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(),
            start_time: Instant::now(),
            model: model.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Get elapsed time in seconds, for metrics
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Log the forwarded model
    pub fn log_forwarding(&self, url: &str) {
        info!(
            trace_id = %self.trace_id,
            model = %self.model,
            "Forwarding request for model"
        );
        debug!(trace_id = %self.trace_id, url = %url, "Sending request to inference API");
    }

    /// Log a successful upstream response whose body is now streaming
    pub fn log_stream_started(&self, status: u16, content_type: &str) {
        info!(
            trace_id = %self.trace_id,
            model = %self.model,
            status = %status,
            content_type = %content_type,
            elapsed_ms = %self.elapsed_ms(),
            "Streaming inference response"
        );
    }

    /// Log an error status and body returned by the inference API
    pub fn log_upstream_error(&self, status: u16, body: &serde_json::Value) {
        error!(
            trace_id = %self.trace_id,
            model = %self.model,
            status = %status,
            body = %body,
            elapsed_ms = %self.elapsed_ms(),
            "Inference API error"
        );
    }

    /// Log a transport or decoding failure
    pub fn log_failure(&self, error: &dyn std::fmt::Display) {
        error!(
            trace_id = %self.trace_id,
            model = %self.model,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Relay request failed"
        );
    }
}
