use crate::config::ClientConfig;
use crate::decode;
use crate::models::{ClassificationRequest, ClassificationResult, ClassifierKind};
use crate::rules::IconRuleSet;
use providers::http::HttpTransport;
use providers::{InferenceTransport, ProviderError};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Could not reach the model API. Check API URL / CORS / endpoint.";
pub const BUSY_MESSAGE: &str = "A request is already in progress.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassifyError {
    #[error("invalid {kind} input: {reason}")]
    Validation { kind: ClassifierKind, reason: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("API error: {status}")]
    Remote { status: u16 },
    #[error("unreadable response: {0}")]
    InvalidResponse(String),
    #[error("a request is already in flight")]
    Busy,
    #[error("request interrupted before completion")]
    Interrupted,
}

impl ClassifyError {
    /// Text shown to the end user. Status codes and transport detail stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClassifyError::Validation { kind, .. } => kind.empty_input_message(),
            ClassifyError::Busy => BUSY_MESSAGE,
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<ProviderError> for ClassifyError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::RequestFailed(msg) | ProviderError::InvalidRequest(msg) => {
                ClassifyError::Transport(msg)
            }
        }
    }
}

/// Sends one request per call to the endpoint configured for its kind.
#[derive(Clone)]
pub struct ClassifierClient {
    transport: Arc<dyn InferenceTransport>,
    endpoints: Arc<HashMap<ClassifierKind, String>>,
    icons: Arc<IconRuleSet>,
}

impl ClassifierClient {
    pub fn new(cfg: &ClientConfig, icons: IconRuleSet) -> Result<Self, ClassifyError> {
        let transport = HttpTransport::new(cfg.timeout())?;
        Ok(Self::with_transport(Arc::new(transport), cfg, icons))
    }

    pub fn with_transport(
        transport: Arc<dyn InferenceTransport>,
        cfg: &ClientConfig,
        icons: IconRuleSet,
    ) -> Self {
        let endpoints: HashMap<_, _> = ClassifierKind::ALL
            .iter()
            .map(|kind| (*kind, cfg.endpoint_url(*kind)))
            .collect();
        Self {
            transport,
            endpoints: Arc::new(endpoints),
            icons: Arc::new(icons),
        }
    }

    pub fn endpoint(&self, kind: ClassifierKind) -> Option<&str> {
        self.endpoints.get(&kind).map(String::as_str)
    }

    pub async fn classify(
        &self,
        request: ClassificationRequest,
    ) -> Result<ClassificationResult, ClassifyError> {
        let kind = request.kind();
        let payload = request.into_payload()?;
        let url = self
            .endpoint(kind)
            .ok_or_else(|| ClassifyError::Transport(format!("no endpoint configured for {kind}")))?;

        info!(%kind, url, "dispatching classification request");
        let resp = self.transport.post(url, &payload).await.map_err(|e| {
            error!(%kind, url, error = %e, "classifier unreachable");
            ClassifyError::from(e)
        })?;

        if !resp.is_success() {
            warn!(%kind, status = resp.status, "classifier returned error status");
            return Err(ClassifyError::Remote {
                status: resp.status,
            });
        }

        let body = resp.body.ok_or_else(|| {
            error!(%kind, status = resp.status, "classifier response is not JSON");
            ClassifyError::InvalidResponse("response body is not JSON".to_string())
        })?;
        debug!(%kind, body = %body, "classifier response");

        let decoded = decode::decode(kind, &body);
        let category = self.icons.resolve(kind, &decoded.label);
        info!(%kind, label = %decoded.label, confidence = ?decoded.confidence_percent, "classification complete");

        Ok(ClassificationResult {
            label: decoded.label,
            confidence_percent: decoded.confidence_percent,
            category,
        })
    }
}
