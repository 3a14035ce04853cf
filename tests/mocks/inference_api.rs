//! Mock hosted inference API for testing
//!
//! Provides wiremock-based mocks for `POST /models/<model id>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::inference_api::MockInferenceApi;
//!
//! #[tokio::test]
//! async fn test_with_inference_mock() {
//!     let api = MockInferenceApi::start().await;
//!     api.mock_image("m1", b"\x89PNG").await;
//!
//!     // Use api.base_url() as HF_INFERENCE_URL
//! }
//! ```

use serde_json::Value;
use wiremock::{
    matchers::{any, header_exists, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Path prefix the mock serves models under
pub const MODELS_PREFIX: &str = "/models/";

/// Mock inference API server wrapper
pub struct MockInferenceApi {
    server: MockServer,
}

impl MockInferenceApi {
    /// Start a new mock inference API server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Get the mock server URI
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Base URL to configure the relay with, ending in `/models/`
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), MODELS_PREFIX)
    }

    fn model_path(model: &str) -> String {
        format!("{}{}", MODELS_PREFIX, model)
    }

    /// Mock a successful raw response with the given content type
    pub async fn mock_success(&self, model: &str, body: &[u8], content_type: &str) {
        Mock::given(method("POST"))
            .and(path(Self::model_path(model)))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_vec(), content_type))
            .mount(&self.server)
            .await;
    }

    /// Mock a 2xx response other than 200
    pub async fn mock_success_with_status(&self, model: &str, status: u16, body: &[u8]) {
        Mock::given(method("POST"))
            .and(path(Self::model_path(model)))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body.to_vec(), "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a successful PNG image response
    pub async fn mock_image(&self, model: &str, png: &[u8]) {
        self.mock_success(model, png, "image/png").await;
    }

    /// Mock a successful response that carries no Content-Type header
    pub async fn mock_success_without_content_type(&self, model: &str, body: &[u8]) {
        Mock::given(method("POST"))
            .and(path(Self::model_path(model)))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with a JSON body
    pub async fn mock_error_json(&self, model: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::model_path(model)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with a body that is not JSON
    pub async fn mock_error_text(&self, model: &str, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(Self::model_path(model)))
            .respond_with(
                ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "text/html"),
            )
            .mount(&self.server)
            .await;
    }

    /// Fail verification if the relay contacts upstream at all
    pub async fn expect_no_calls(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Check that every mounted expectation was met
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Requests received so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let api = MockInferenceApi::start().await;
        assert!(api.base_url().ends_with("/models/"));
    }

    #[tokio::test]
    async fn test_mock_image_response() {
        let api = MockInferenceApi::start().await;
        api.mock_image("m1", b"png-bytes").await;

        let response = reqwest::Client::new()
            .post(format!("{}m1", api.base_url()))
            .header("Authorization", "Bearer test-key")
            .json(&json!({ "inputs": "a cat" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "image/png");
        assert_eq!(response.bytes().await.unwrap().as_ref(), b"png-bytes");
    }

    #[tokio::test]
    async fn test_mock_error_json_response() {
        let api = MockInferenceApi::start().await;
        api.mock_error_json("missing", 404, json!({ "error": "model not found" }))
            .await;

        let response = reqwest::Client::new()
            .post(format!("{}missing", api.base_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "model not found");
    }
}
