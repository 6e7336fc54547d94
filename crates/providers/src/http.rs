use crate::{InferenceTransport, ProviderError, RawResponse, RemotePayload, TextBody};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Builds the shared reqwest client. `None` keeps reqwest's default of no timeout.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, ProviderError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ProviderError::InvalidRequest(e.to_string()))
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }
}

fn file_part(file_name: &str, bytes: &[u8]) -> Result<Part, ProviderError> {
    let part = Part::bytes(bytes.to_vec()).file_name(file_name.to_string());
    match infer::get(bytes) {
        Some(kind) => part
            .mime_str(kind.mime_type())
            .map_err(|e| ProviderError::InvalidRequest(e.to_string())),
        None => Ok(part),
    }
}

#[async_trait::async_trait]
impl InferenceTransport for HttpTransport {
    async fn post(&self, url: &str, payload: &RemotePayload) -> Result<RawResponse, ProviderError> {
        let builder = match payload {
            RemotePayload::File { file_name, bytes } => {
                let form = Form::new().part("file", file_part(file_name, bytes)?);
                self.client.post(url).multipart(form)
            }
            RemotePayload::Text(text) => self.client.post(url).json(&TextBody { text }),
        };

        debug!(url, bytes = payload.len(), "posting inference request");
        let resp = builder
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = resp.status().as_u16();
        let raw = resp
            .bytes()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        let body = serde_json::from_slice(&raw).ok();

        Ok(RawResponse { status, body })
    }
}
