//! Generation relay endpoint
//!
//! `POST /api/generate` forwards `{prompt, model, parameters}` to the
//! inference API with the server-held credential attached.

use std::sync::Arc;

use axum::{extract::State, response::Response};
use bytes::Bytes;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::error;

use crate::{
    error::{AppError, AppResult},
    proxy::{InferencePayload, RequestContext},
    routes::metrics::record_request,
    AppState,
};

/// Generation request sent by the browser
///
/// Every field is optional; missing values are forwarded as absent.
/// An explicit `"parameters": null` is kept and forwarded as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    pub parameters: Option<Value>,
}

/// `Some` for any value that is present in the body, including `null`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl GenerationRequest {
    /// Parse a request body; an empty body is an empty request
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|_| AppError::BadRequest("Invalid JSON in request body.".to_string()))
    }

    /// Split into the model id and the upstream payload
    pub fn into_parts(self) -> (String, InferencePayload) {
        (
            self.model.unwrap_or_default(),
            InferencePayload {
                inputs: self.prompt,
                parameters: self.parameters,
            },
        )
    }
}

/// Relay a generation request to the inference API
///
/// 1. Parses the body without enforcing a schema
/// 2. Refuses to call upstream without a usable credential
/// 3. Streams upstream success bodies back unchanged
/// 4. Forwards upstream error statuses with a JSON `error` message
pub async fn generate(State(state): State<Arc<AppState>>, body: Bytes) -> AppResult<Response> {
    let request = GenerationRequest::from_body(&body)?;

    let Some(credential) = state.config.credential.as_ref() else {
        error!("API key is missing or is a placeholder");
        return Err(AppError::MissingCredential);
    };

    let (model, payload) = request.into_parts();
    let ctx = RequestContext::new(model);

    let result = state.inference.relay(&ctx, credential, &payload).await;

    let status_label = match &result {
        Ok(_) => "success",
        Err(AppError::Upstream { .. }) => "upstream_error",
        Err(_) => "error",
    };
    record_request(status_label, ctx.elapsed_secs());

    result
}
