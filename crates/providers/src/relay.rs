//! Stateless JSON relay to a single upstream URL.

use crate::http::build_client;
use crate::ProviderError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{error, info};

pub const BAD_GATEWAY: u16 = 502;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Clone)]
pub struct ForwardingProxy {
    client: Client,
    upstream_url: String,
}

impl ForwardingProxy {
    pub fn new(upstream_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ProviderError> {
        Ok(Self::with_client(build_client(timeout)?, upstream_url))
    }

    pub fn with_client(client: Client, upstream_url: impl Into<String>) -> Self {
        Self {
            client,
            upstream_url: upstream_url.into(),
        }
    }

    /// Posts `body` upstream once and mirrors the reply.
    ///
    /// Never fails: an unreachable upstream becomes a 502 with a
    /// `Proxy error` body, and a non-JSON upstream body becomes `{}`.
    pub async fn forward(&self, body: &Value) -> RelayResponse {
        match self.send(body).await {
            Ok(relayed) => {
                info!(status = relayed.status, upstream = %self.upstream_url, "relayed upstream response");
                relayed
            }
            Err(e) => {
                error!(upstream = %self.upstream_url, error = %e, "intent upstream unreachable");
                let message = match e {
                    ProviderError::RequestFailed(msg) | ProviderError::InvalidRequest(msg) => msg,
                };
                proxy_error(&message)
            }
        }
    }

    async fn send(&self, body: &Value) -> Result<RelayResponse, ProviderError> {
        let payload =
            serde_json::to_vec(body).map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;
        let resp = self
            .client
            .post(&self.upstream_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp.json::<Value>().await.unwrap_or_else(|_| json!({}));
        Ok(RelayResponse { status, body })
    }
}

pub fn proxy_error(message: &str) -> RelayResponse {
    let message = if message.trim().is_empty() {
        "Could not reach intent API"
    } else {
        message
    };
    RelayResponse {
        status: BAD_GATEWAY,
        body: json!({ "error": "Proxy error", "message": message }),
    }
}
