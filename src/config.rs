//! Configuration management for the relay
//!
//! Configuration is loaded once from environment variables at startup and
//! then shared read-only with every request handler.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Placeholder token shipped in example `.env` files
pub const PLACEHOLDER_TOKEN: &str = "hf_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";

/// Default base URL of the hosted inference API
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models/";

/// Bearer secret injected into upstream requests
///
/// Never printed: the `Debug` impl redacts the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Build a credential from a raw token.
    ///
    /// Returns `None` for an empty value or the well-known placeholder.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_TOKEN {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// The raw secret, for building the Authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Inference API credential; `None` when missing or a placeholder
    pub credential: Option<Credential>,
    /// Base inference URL, the model id is appended verbatim
    pub inference_url: String,

    /// Directory served for every non-API path
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values fall back to defaults, like an unset variable
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "10000".to_string())
                .parse()
                .context("Invalid PORT")?,

            credential: var("HUGGING_FACE_TOKEN").and_then(Credential::new),
            inference_url: var("HF_INFERENCE_URL")
                .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string()),

            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
        })
    }

    /// Whether a usable credential was loaded
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}
