//! Transport abstractions for remote inference endpoints.

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

pub mod http;
pub mod relay;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Body of one outbound classification call.
#[derive(Debug, Clone)]
pub enum RemotePayload {
    /// Sent as `multipart/form-data` with a single `file` part.
    File { file_name: String, bytes: Bytes },
    /// Sent as `application/json` `{"text": ..}`.
    Text(String),
}

impl RemotePayload {
    pub fn len(&self) -> usize {
        match self {
            RemotePayload::File { bytes, .. } => bytes.len(),
            RemotePayload::Text(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Serialize)]
pub struct TextBody<'a> {
    pub text: &'a str,
}

/// Status and decoded body of a remote response.
///
/// `body` is `None` when the response could not be read as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn post(&self, url: &str, payload: &RemotePayload) -> Result<RawResponse, ProviderError>;
}
