//! Inference Relay - forwards browser generation requests to a hosted
//! inference API
//!
//! The relay keeps the inference API token on the server, injects it as a
//! bearer credential, and streams the upstream answer back to the caller.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::config::{Config, Credential};
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::InferenceClient;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Client for the hosted inference API
    pub inference: Arc<InferenceClient>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Connection pooling only; upstream calls are never timed out
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let inference = Arc::new(InferenceClient::new(http_client, &config));

        Ok(Self {
            config,
            start_time: Instant::now(),
            inference,
        })
    }
}
