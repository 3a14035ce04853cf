//! Header utilities for inference API calls
//!
//! Caller headers are never forwarded upstream; the relay builds a fixed
//! header set around the server-held credential.

use axum::http::header::CONTENT_TYPE;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::Credential;
use crate::error::{AppError, AppResult};

/// Asks the inference API to bypass its result cache
pub const USE_CACHE: &str = "x-use-cache";

/// Content type used when upstream does not send one
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Build the headers for an upstream generation request
pub fn build_upstream_headers(credential: &Credential) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let bearer = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Credential is not a valid header value")))?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USE_CACHE, HeaderValue::from_static("false"));

    Ok(headers)
}

/// Content type of an upstream response, or the generic binary type
pub fn content_type_or_default(upstream: &HeaderMap) -> HeaderValue {
    upstream
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE))
}
