//! Mock infrastructure for testing external services
//!
//! This module provides a wiremock-based stand-in for the hosted inference
//! API, reusable across test files.

#![allow(dead_code, unused_imports)]

pub mod inference_api;

pub use inference_api::*;
