//! Upstream text-generation service: one-shot client and the retry
//! policy wrapped around it.

pub mod client;
pub mod retry;

pub use client::ApiFreeLlmClient;
pub use retry::{call_with_retry, FAILURE_SENTINEL};

use async_trait::async_trait;
use std::fmt;

/// One attempt against the upstream service. No internal retry; every
/// failure surfaces to the retry policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamCall: Send + Sync {
    async fn call_once(&self, prompt: &str) -> Result<String, UpstreamError>;
}

/// A single failed attempt against the upstream service.
#[derive(Debug)]
pub enum UpstreamError {
    /// Connection failure, per-request timeout, or undecodable body
    Request(reqwest::Error),
    /// Upstream answered with a non-2xx status
    Status(reqwest::StatusCode),
    /// Response body carried no "response" text field
    MissingField,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Request(e) => write!(f, "Request error: {}", e),
            UpstreamError::Status(code) => write!(f, "Upstream returned status {}", code),
            UpstreamError::MissingField => write!(f, "Response field missing from upstream body"),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Request(e) => Some(e),
            UpstreamError::Status(_) => None,
            UpstreamError::MissingField => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Request(err)
    }
}
