//! Proxy module
//!
//! Handles request forwarding to the hosted inference API.

pub mod headers;
pub mod inference;
pub mod logging;

pub use inference::{InferenceClient, InferencePayload};
pub use logging::RequestContext;
