//! Hosted inference API client
//!
//! Forwards a generation payload to `<base url><model id>` with the
//! server-held credential and turns the upstream answer into the response
//! sent back to the caller.

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{Config, Credential},
    error::{AppError, AppResult},
    proxy::{headers, RequestContext},
};

/// Body sent to the inference API
///
/// Fields missing from the caller's request are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InferencePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// Client for the hosted inference API
pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.inference_url.clone(),
        }
    }

    /// Upstream URL for a model: plain concatenation, nothing added or encoded
    pub fn model_url(&self, model: &str) -> String {
        format!("{}{}", self.base_url, model)
    }

    /// Send a generation request and relay the answer
    ///
    /// Success bodies are streamed through untouched. Error statuses come
    /// back as [`AppError::Upstream`] carrying the same status code.
    pub async fn relay(
        &self,
        ctx: &RequestContext,
        credential: &Credential,
        payload: &InferencePayload,
    ) -> AppResult<Response<Body>> {
        let url = self.model_url(&ctx.model);
        ctx.log_forwarding(&url);

        let response = self
            .client
            .post(&url)
            .headers(headers::build_upstream_headers(credential)?)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                ctx.log_failure(&e);
                e
            })?;

        if response.status().is_success() {
            return self.stream_response(ctx, response);
        }

        let status = response.status();
        let error_data: Value = response.json().await.map_err(|e| {
            ctx.log_failure(&e);
            e
        })?;
        ctx.log_upstream_error(status.as_u16(), &error_data);

        Err(AppError::Upstream {
            status,
            error: upstream_error_message(&error_data, status),
        })
    }

    /// Pipe a successful upstream response straight to the caller
    fn stream_response(
        &self,
        ctx: &RequestContext,
        response: reqwest::Response,
    ) -> AppResult<Response<Body>> {
        let status = response.status();
        let content_type = headers::content_type_or_default(response.headers());
        ctx.log_stream_started(
            status.as_u16(),
            content_type.to_str().unwrap_or("<binary>"),
        );

        Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from_stream(response.bytes_stream()))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build response: {}", e)))
    }
}

/// Pick the message forwarded for an upstream failure
///
/// A truthy `error` field is passed through as-is, whatever its JSON type.
pub fn upstream_error_message(payload: &Value, status: StatusCode) -> Value {
    match payload.get("error") {
        Some(error) if is_truthy(error) => error.clone(),
        _ => Value::String(format!(
            "Inference API failed with status {}",
            status.as_u16()
        )),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
